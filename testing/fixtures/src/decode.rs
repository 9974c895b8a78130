//! Text decoders that feed raw, unvalidated values into record builders.
//!
//! Constraint checks happen in `build`, so a bad value surfaces as the
//! record's own failure case.

use crate::{Account, Ordered, User, account, ordered, user};

/// Decode `id[,nickname]`.
pub fn user_from_line(line: &str) -> Result<User, user::ValidationFailure> {
    let mut fields = line.splitn(2, ',');
    let mut builder = User::builder();

    if let Some(id) = fields.next().filter(|id| !id.is_empty()) {
        builder = builder.id(id.to_string());
    }
    builder = builder.set_nickname(fields.next().map(str::to_string));

    builder.build()
}

/// Decode `nick,id`, where either field may be left empty.
pub fn ordered_from_line(line: &str) -> Result<Ordered, ordered::ValidationFailure> {
    let (nick, id) = line.split_once(',').unwrap_or((line, ""));
    let mut builder = Ordered::builder().set_nick(Some(nick.to_string()));

    if !id.is_empty() {
        builder = builder.id(id.to_string());
    }

    builder.build()
}

/// Decode a bare handle into an account with no owner.
pub fn account_from_handle(handle: &str) -> Result<Account, account::ValidationFailure> {
    Account::builder().set_handle(handle.to_string()).build()
}
