//! Error catalog for the required remainder REST API.

use remainder_errors::ErrDef;

/// Catalog entries, one per error classification.
pub struct ErrorCode;

impl ErrorCode {
    const MALFORMED_REQUEST: ErrDef = ErrDef {
        status: 400,
        title: "Bad Request",
        code: "MALFORMED_REQUEST",
        type_url: "https://errors.required-remainder.dev/MALFORMED_REQUEST",
    };

    const VALIDATION_ERROR: ErrDef = ErrDef {
        status: 400,
        title: "Bad Request",
        code: "VALIDATION_ERROR",
        type_url: "https://errors.required-remainder.dev/VALIDATION_ERROR",
    };

    const PAYLOAD_TOO_LARGE: ErrDef = ErrDef {
        status: 413,
        title: "Payload Too Large",
        code: "PAYLOAD_TOO_LARGE",
        type_url: "https://errors.required-remainder.dev/PAYLOAD_TOO_LARGE",
    };

    /// Body is not syntactically valid JSON or lacks the JSON content type.
    #[must_use]
    pub const fn malformed_request_v1() -> ErrDef {
        Self::MALFORMED_REQUEST
    }

    /// JSON is well formed but does not match the request shape: the top level
    /// is not an array, or an item field is missing or has the wrong type.
    #[must_use]
    pub const fn validation_v1() -> ErrDef {
        Self::VALIDATION_ERROR
    }

    #[must_use]
    pub const fn payload_too_large_v1() -> ErrDef {
        Self::PAYLOAD_TOO_LARGE
    }
}
