use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{params, Row};
use tokio_rusqlite::Connection;

use crate::error::Result;
use crate::models::{NewOpportunity, Opportunity, OpportunityType};

use super::schema::SCHEMA;
use super::seed::example_opportunities;

const SELECT_COLUMNS: &str = "SELECT id, title, opportunity_type, field, institution, description, link, paid, \
     location, start_term, deadline, active, archived, created_at FROM opportunity";

pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path).await?;

        conn.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;

        Ok(Self { conn })
    }

    pub async fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .call(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM opportunity", [], |row| row.get(0))?;
                Ok(count)
            })
            .await?;
        Ok(count)
    }

    /// Inserts every record in one transaction. Records without a
    /// creation time are stamped with the current time.
    pub async fn insert_many(&self, opportunities: Vec<NewOpportunity>) -> Result<usize> {
        let inserted = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                let inserted = insert_rows(&tx, opportunities)?;
                tx.commit()?;
                Ok(inserted)
            })
            .await?;
        Ok(inserted)
    }

    /// Newest first. The type filter ignores the stored capitalisation.
    pub async fn list(&self, filter: Option<OpportunityType>) -> Result<Vec<Opportunity>> {
        let slug = filter.map(|t| t.as_str());
        let opportunities = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "{SELECT_COLUMNS} WHERE (?1 IS NULL OR lower(opportunity_type) = ?1) \
                     ORDER BY created_at DESC, id DESC"
                ))?;
                let opportunities = stmt
                    .query_map(params![slug], opportunity_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(opportunities)
            })
            .await?;
        Ok(opportunities)
    }

    /// Writes the example listings when the table is empty. The count
    /// check and the inserts share one transaction. Returns how many rows
    /// were written.
    pub async fn seed_if_empty(&self) -> Result<usize> {
        let examples = example_opportunities();
        let inserted = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                let count: i64 =
                    tx.query_row("SELECT COUNT(*) FROM opportunity", [], |row| row.get(0))?;
                if count > 0 {
                    return Ok(0);
                }
                let inserted = insert_rows(&tx, examples)?;
                tx.commit()?;
                Ok(inserted)
            })
            .await?;

        if inserted > 0 {
            tracing::info!("Seeded {} example opportunities", inserted);
        } else {
            tracing::info!("Opportunities already exist, skipping seeding");
        }
        Ok(inserted)
    }
}

fn insert_rows(conn: &rusqlite::Connection, opportunities: Vec<NewOpportunity>) -> rusqlite::Result<usize> {
    for opportunity in &opportunities {
        insert_row(conn, opportunity)?;
    }
    Ok(opportunities.len())
}

fn insert_row(conn: &rusqlite::Connection, opportunity: &NewOpportunity) -> rusqlite::Result<()> {
    let created_at = opportunity.created_at.unwrap_or_else(Utc::now);
    conn.execute(
        r#"INSERT INTO opportunity (title, opportunity_type, field, institution, description, link,
                                    paid, location, start_term, deadline, active, archived, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"#,
        params![
            opportunity.title,
            opportunity.opportunity_type,
            opportunity.field,
            opportunity.institution,
            opportunity.description,
            opportunity.link,
            opportunity.paid,
            opportunity.location,
            opportunity.start_term,
            opportunity.deadline.map(|d| d.format("%Y-%m-%d").to_string()),
            opportunity.active,
            opportunity.archived,
            created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        ],
    )?;
    Ok(())
}

pub(crate) fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC3339 first (e.g., "2026-01-11T12:34:56+00:00")
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Try SQLite datetime format (e.g., "2026-01-11 12:34:56")
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

fn opportunity_from_row(row: &Row) -> rusqlite::Result<Opportunity> {
    Ok(Opportunity {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        opportunity_type: row.get(2)?,
        field: row.get(3)?,
        institution: row.get(4)?,
        description: row.get(5)?,
        link: row.get(6)?,
        paid: row.get(7)?,
        location: row.get(8)?,
        start_term: row.get(9)?,
        deadline: row
            .get::<_, Option<String>>(10)?
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        active: row.get(11)?,
        archived: row.get(12)?,
        created_at: parse_datetime(&row.get::<_, String>(13)?),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    use super::*;

    async fn scratch_repository() -> (TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.db");
        let repo = Repository::new(path.to_str().unwrap()).await.unwrap();
        (dir, repo)
    }

    fn listing(title: &str, opportunity_type: OpportunityType) -> NewOpportunity {
        NewOpportunity {
            title: title.to_string(),
            opportunity_type,
            field: "Biology".to_string(),
            institution: None,
            description: None,
            link: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
            paid: false,
            location: None,
            start_term: None,
            deadline: None,
            active: true,
            archived: false,
            created_at: None,
        }
    }

    fn listing_at(
        title: &str,
        opportunity_type: OpportunityType,
        created_at: DateTime<Utc>,
    ) -> NewOpportunity {
        NewOpportunity {
            created_at: Some(created_at),
            ..listing(title, opportunity_type)
        }
    }

    #[tokio::test]
    async fn seeds_three_examples_into_an_empty_store() {
        let (_dir, repo) = scratch_repository().await;

        assert_eq!(repo.seed_if_empty().await.unwrap(), 3);

        let mut titles: Vec<String> = repo
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.title)
            .collect();
        titles.sort();
        assert_eq!(
            titles,
            vec![
                "Data Science Job",
                "Marine Biology Research",
                "Summer Research Internship",
            ]
        );
    }

    #[tokio::test]
    async fn seeding_twice_inserts_nothing_the_second_time() {
        let (dir, repo) = scratch_repository().await;
        repo.seed_if_empty().await.unwrap();
        drop(repo);

        let reopened = Repository::new(dir.path().join("project.db").to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(reopened.seed_if_empty().await.unwrap(), 0);
        assert_eq!(reopened.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn seed_skips_a_store_that_already_has_rows() {
        let (_dir, repo) = scratch_repository().await;
        repo.insert_many(vec![listing("Lab Assistant", OpportunityType::Job)])
            .await
            .unwrap();

        assert_eq!(repo.seed_if_empty().await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let (_dir, repo) = scratch_repository().await;
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        repo.insert_many(vec![
            listing_at("Middle", OpportunityType::Job, base + Duration::days(1)),
            listing_at("Oldest", OpportunityType::Research, base),
            listing_at("Newest", OpportunityType::Internship, base + Duration::days(2)),
        ])
        .await
        .unwrap();

        let listed = repo.list(None).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
        assert_eq!(listed[0].created_at, Some(base + Duration::days(2)));
    }

    #[tokio::test]
    async fn filters_by_type_regardless_of_stored_case() {
        let (_dir, repo) = scratch_repository().await;
        repo.seed_if_empty().await.unwrap();

        let internships = repo.list(Some(OpportunityType::Internship)).await.unwrap();
        assert_eq!(internships.len(), 1);
        assert_eq!(internships[0].title, "Summer Research Internship");
        assert_eq!(internships[0].opportunity_type, OpportunityType::Internship);
        assert_eq!(internships[0].deadline, NaiveDate::from_ymd_opt(2026, 4, 15));
        assert!(internships[0].paid);
        assert!(internships[0].active);
        assert!(!internships[0].archived);
        assert!(internships[0].id.is_some());
    }

    #[tokio::test]
    async fn csv_import_keeps_published_creation_times() {
        let (_dir, repo) = scratch_repository().await;
        let csv = "title,opportunity_type,link,created_at\n\
                   Oldest,job,https://example.com/oldest,2020-01-01 08:00:00\n\
                   Undated,research,https://example.com/undated,\n\
                   Newest,internship,https://example.com/newest,2020-03-01 08:00:00\n";
        let imported: Vec<NewOpportunity> = crate::sources::parse_csv(csv.as_bytes())
            .unwrap()
            .into_iter()
            .map(NewOpportunity::from)
            .collect();
        assert_eq!(repo.insert_many(imported).await.unwrap(), 3);

        let listed = repo.list(None).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Undated", "Newest", "Oldest"]);
        assert_eq!(
            listed[1].created_at,
            Some(Utc.with_ymd_and_hms(2020, 3, 1, 8, 0, 0).unwrap())
        );
        assert_eq!(
            listed[2].created_at,
            Some(Utc.with_ymd_and_hms(2020, 1, 1, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn parses_rfc3339_and_sqlite_timestamps() {
        let expected = Utc.with_ymd_and_hms(2026, 1, 11, 12, 34, 56).unwrap();
        assert_eq!(parse_datetime("2026-01-11T12:34:56+00:00"), Some(expected));
        assert_eq!(parse_datetime("2026-01-11 12:34:56"), Some(expected));
        assert_eq!(parse_datetime("last tuesday"), None);
    }
}
