//! Line codec for the user file.
//!
//! One record per line:
//!
//! ```text
//! username|password|genre1,genre2,...|membershipFee
//! ```

use crate::models::User;
use crate::text::{join_csv, split_csv, trim};

/// Field separator within a record
pub const FIELD_SEPARATOR: char = '|';

/// Fee substituted when a record's fee field does not parse
pub const FALLBACK_FEE: f64 = 0.0;

/// A record whose fee field could not be parsed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("membership fee {value:?} for user {username:?} is not a number")]
pub struct MalformedFee {
    pub username: String,
    pub value: String,
}

/// Outcome of decoding a single line
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Clean(User),
    /// Decoded with [`FALLBACK_FEE`] in place of an unparseable fee
    Recovered { user: User, warning: MalformedFee },
}

impl Decoded {
    pub fn into_user(self) -> User {
        match self {
            Decoded::Clean(user) | Decoded::Recovered { user, .. } => user,
        }
    }
}

/// A recovered record and the 1-based line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LineWarning {
    pub line: usize,
    pub error: MalformedFee,
}

/// Everything decoded from one persisted file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Users in file order
    pub users: Vec<User>,
    pub warnings: Vec<LineWarning>,
}

pub fn encode(user: &User) -> String {
    format!(
        "{}{sep}{}{sep}{}{sep}{}",
        user.username,
        user.password,
        join_csv(&user.genres),
        user.membership_fee,
        sep = FIELD_SEPARATOR
    )
}

/// Encodes every user as a `\n`-terminated line, in order
pub fn encode_all(users: &[User]) -> String {
    users.iter().fold(String::new(), |mut out, user| {
        out.push_str(&encode(user));
        out.push('\n');
        out
    })
}

/// Decodes one non-blank line
///
/// Only the first four `|`-separated fields are read. Missing trailing
/// fields are treated as empty, so a line without a fee decodes as
/// [`Decoded::Recovered`].
pub fn decode(line: &str) -> Decoded {
    let mut fields = line.split(FIELD_SEPARATOR);
    let mut next_field = || fields.next().unwrap_or("");

    let username = trim(next_field()).to_string();
    let password = trim(next_field()).to_string();
    let genres = split_csv(next_field());
    let fee_field = next_field();

    match trim(fee_field).parse::<f64>() {
        Ok(fee) => Decoded::Clean(User::new(username, password, genres, fee)),
        Err(_) => {
            let warning = MalformedFee {
                username: username.clone(),
                value: fee_field.to_string(),
            };
            Decoded::Recovered {
                user: User::new(username, password, genres, FALLBACK_FEE),
                warning,
            }
        }
    }
}

/// Decodes a whole file, skipping blank lines
///
/// A malformed fee never stops the load; it is logged and collected in
/// [`LoadReport::warnings`].
pub fn decode_all(contents: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (index, line) in contents.lines().enumerate() {
        if trim(line).is_empty() {
            continue;
        }

        match decode(line) {
            Decoded::Clean(user) => report.users.push(user),
            Decoded::Recovered { user, warning } => {
                tracing::warn!(
                    line = index + 1,
                    username = %warning.username,
                    value = %warning.value,
                    "Malformed membership fee, substituting {}",
                    FALLBACK_FEE
                );
                report.users.push(user);
                report.warnings.push(LineWarning {
                    line: index + 1,
                    error: warning,
                });
            }
        }
    }

    report
}
