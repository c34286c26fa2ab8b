/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::ws::ApiErrorCodes;
use num_enum::TryFromPrimitiveError;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum PiwigoError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("Expected response missing")]
    ResponseMissing(),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u32, String),

    #[error("API Response error code is not a known one")]
    ApiResponseCode(#[from] TryFromPrimitiveError<ApiErrorCodes>),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),
}
