use crate::error::Result;

pub async fn livez() -> Result<&'static str> {
    tracing::debug!("service is live");
    Ok("ok")
}
