//! The URL paths of the tracker's REST API.
//!
//! Each resource type has a single base path; the generic client in
//! [crate::resource] derives the per-item paths from it.

/// The base path for accounts.
pub const ACCOUNTS: &str = "/account";
/// The base path for transactions (incomes and expenses).
pub const TRANSACTIONS: &str = "/transaction";

// These tests are here so that we know the paths survive joining onto a
// server origin without double slashes or percent-escaping surprises.
#[cfg(test)]
mod endpoints_tests {
    use reqwest::Url;

    use super::{ACCOUNTS, TRANSACTIONS};

    fn assert_joins_cleanly(path: &str) {
        let origin = Url::parse("http://localhost:8000").expect("could not parse test origin");
        let joined = origin
            .join(path)
            .unwrap_or_else(|error| panic!("could not join {path} onto the origin: {error}"));

        assert_eq!(joined.path(), path);
    }

    #[test]
    fn paths_join_onto_an_origin() {
        assert_joins_cleanly(ACCOUNTS);
        assert_joins_cleanly(TRANSACTIONS);
    }
}
