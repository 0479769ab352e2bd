//! Request helper extensions.

use std::{fmt::Display, str::FromStr};

use salvo::prelude::{Request, StatusError};

use crate::extensions::ResultExt;

/// Typed query-string access for parameters whose wire names are camelCase.
pub(crate) trait RequestExt {
    /// Parse an optional query parameter. Blank values count as absent.
    fn query_or_400<T>(&self, name: &str) -> Result<Option<T>, StatusError>
    where
        T: FromStr,
        T::Err: Display;

    /// Parse a required query parameter.
    fn required_query_or_400<T>(&self, name: &str) -> Result<T, StatusError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.query_or_400(name)?.ok_or_else(|| {
            StatusError::bad_request()
                .brief("Missing query parameter")
                .detail(format!("`{name}` is required"))
        })
    }
}

impl RequestExt for Request {
    fn query_or_400<T>(&self, name: &str) -> Result<Option<T>, StatusError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.query::<String>(name)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(|raw| raw.parse::<T>())
            .transpose()
            .or_400("Invalid query parameter")
    }
}
