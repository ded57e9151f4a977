use crate::cli::{MemberArgs, SubmitWhen};
use crate::commands;
use crate::core::Leaderboard;
use crate::error::MelloError;
use crate::models::Member;

impl From<MemberArgs> for Member {
    fn from(args: MemberArgs) -> Self {
        Member {
            user_id: args.user,
            nick: args.nick,
            username: args.username,
        }
    }
}

/// Handle the init command
pub fn handle_init(board: &Leaderboard) -> Result<(), MelloError> {
    board.initialize()?;
    println!(
        "Initialized score database at {}",
        board.config().db_path().display()
    );
    Ok(())
}

/// Handle the submit command
pub fn handle_submit(board: &Leaderboard, when: SubmitWhen) -> Result<(), MelloError> {
    let (date, time, member) = match when {
        SubmitWhen::Today { time, member } => (None, time, member),
        SubmitWhen::ForDate { date, time, member } => (Some(date), time, member),
    };
    let member = Member::from(member);

    let reply = commands::submit(board, &member, date.as_deref(), &time)?;
    println!("Submitted successfully!");
    println!("{reply}");
    Ok(())
}

/// Handle the nick command
pub fn handle_nick(board: &Leaderboard, user: &str, nickname: &str) -> Result<(), MelloError> {
    let reply = commands::nickname(board, user, nickname)?;
    println!("{reply}");
    Ok(())
}

/// Handle the leaderboard command
pub fn handle_leaderboard(board: &Leaderboard) -> Result<(), MelloError> {
    let reply = commands::leaderboard(board)?;
    println!("Leaderboard");
    println!("{reply}");
    Ok(())
}
