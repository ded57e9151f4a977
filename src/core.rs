use crate::config::Config;
use crate::db::Database;
use crate::error::Result;
use crate::models::{Member, RankedScore, RunTime};
use chrono::NaiveDate;
use std::path::Path;

/// Score store handle passed to whichever front-end needs it.
///
/// Holds no open connection: every operation opens its own `Database` and
/// closes it when the operation returns.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    config: Config,
}

impl Leaderboard {
    pub fn new(config: Config) -> Self {
        Leaderboard { config }
    }

    /// Store at a specific path with default settings
    pub fn open_at<P: AsRef<Path>>(path: P) -> Self {
        Leaderboard::new(Config::new(path))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn connect(&self) -> Result<Database> {
        Database::open(self.config.db_path())
    }

    /// Ensure the schema exists. Call once at startup.
    pub fn initialize(&self) -> Result<()> {
        self.connect()?.ensure_schema()
    }

    /// Record a run for `member`, registering them under their current
    /// display name if they have never submitted before
    pub fn submit_score(&self, member: &Member, time: RunTime, date: NaiveDate) -> Result<()> {
        let mut db = self.connect()?;
        db.submit_score(
            &member.user_id,
            member.display_name(),
            time.minutes,
            time.seconds,
            date,
        )
    }

    pub fn set_nickname(&self, user_id: &str, nickname: &str) -> Result<()> {
        self.connect()?.set_nickname(user_id, nickname)
    }

    /// Fastest `count` runs with their submitters' current nicknames
    pub fn top_scores(&self, count: i64) -> Result<Vec<RankedScore>> {
        self.connect()?.query_top_scores(count)
    }

    /// Leaderboard sized by configuration
    pub fn leaderboard(&self) -> Result<Vec<RankedScore>> {
        self.top_scores(self.config.leaderboard_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MelloError;
    use tempfile::TempDir;

    fn setup() -> (Leaderboard, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("scores.sqlite");
        let board = Leaderboard::open_at(&db_path);
        board.initialize().unwrap();
        (board, temp_dir)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_initialize_twice() {
        let (board, _temp) = setup();
        let member = Member::new("u1", "alice");
        board
            .submit_score(&member, RunTime::new(5, 30).unwrap(), date(2024, 1, 15))
            .unwrap();

        board.initialize().unwrap();

        assert_eq!(board.top_scores(10).unwrap().len(), 1);
    }

    #[test]
    fn test_submit_uses_display_name() {
        let (board, _temp) = setup();
        let member = Member::new("u1", "alice_account").with_nick("Alice");

        board
            .submit_score(&member, RunTime::new(5, 30).unwrap(), date(2024, 1, 15))
            .unwrap();

        let top = board.top_scores(1).unwrap();
        assert_eq!(top[0].nickname, "Alice");
        assert_eq!(top[0].time().to_string(), "5:30");
        assert_eq!(top[0].date, date(2024, 1, 15));
    }

    #[test]
    fn test_state_persists_across_handles() {
        let (board, temp) = setup();
        let member = Member::new("u1", "bob");
        board
            .submit_score(&member, RunTime::new(1, 2).unwrap(), date(2024, 6, 1))
            .unwrap();
        board.set_nickname("u1", "Bobby").unwrap();

        let reopened = Leaderboard::open_at(temp.path().join("scores.sqlite"));
        let top = reopened.top_scores(10).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].nickname, "Bobby");
    }

    #[test]
    fn test_leaderboard_respects_configured_size() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("scores.sqlite")).with_leaderboard_size(2);
        let board = Leaderboard::new(config);
        board.initialize().unwrap();

        for (i, id) in ["a", "b", "c"].iter().enumerate() {
            let member = Member::new(*id, *id);
            board
                .submit_score(&member, RunTime::new(i as i64, 0).unwrap(), date(2024, 1, 1))
                .unwrap();
        }

        let top = board.leaderboard().unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].nickname, "a");
    }

    #[test]
    fn test_negative_count_rejected() {
        let (board, _temp) = setup();
        assert!(matches!(
            board.top_scores(-5),
            Err(MelloError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unopenable_path_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let board = Leaderboard::open_at(temp_dir.path().join("missing").join("scores.sqlite"));
        assert!(matches!(
            board.initialize(),
            Err(MelloError::StorageUnavailable(_))
        ));
    }

    #[test]
    fn test_concurrent_submissions_from_cloned_handles() {
        let (board, _temp) = setup();
        let threads = 8;
        let per_thread = 25;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let board = board.clone();
                std::thread::spawn(move || {
                    let member = Member::new(format!("user{t}"), format!("runner{t}"));
                    let mut failures = Vec::new();
                    for i in 0..per_thread {
                        let time = RunTime::new(t, i).unwrap();
                        if let Err(e) = board.submit_score(&member, time, date(2024, 3, 1)) {
                            failures.push(e);
                        }
                        if let Err(e) = board.top_scores(5) {
                            failures.push(e);
                        }
                    }
                    failures
                })
            })
            .collect();

        let failures: Vec<MelloError> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert!(failures.is_empty(), "failed calls: {failures:?}");

        let all = board.top_scores(1000).unwrap();
        assert_eq!(all.len() as i64, threads * per_thread);
        assert_eq!(all[0].nickname, "runner0");
    }
}
