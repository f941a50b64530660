//! # Service Error Types
//!
//! Boundary and API-facing error types for dinetab-service.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in dinetab                                │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  submit payment                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  CheckoutService method                                          │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Gateway failure? ── GatewayError ── PAYMENT_RECORDING_FAILED ─► │  │
//! │  │         │                                                        │  │
//! │  │  Rule violation? ─── CoreError ───── INSUFFICIENT_PAYMENT ─────► │  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  PRECONDITION errors (cart, tender, lifecycle): reject the input,      │
//! │  state unchanged, do NOT retry.                                        │
//! │  BOUNDARY errors (submission/recording failed): state unchanged,       │
//! │  retry with the same inputs is safe.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use dinetab_core::CoreError;

// =============================================================================
// Gateway Error
// =============================================================================

/// Transport-level failure from an external collaborator.
///
/// These are the only recoverable errors in the system: nothing was applied
/// locally, so the caller may retry with identical inputs. Deduplication of
/// retried payments by `order_id` is the recording collaborator's contract.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Collaborator could not be reached.
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),

    /// Collaborator answered with a non-success response.
    #[error("Gateway rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Collaborator did not answer in time.
    #[error("Gateway request timed out")]
    Timeout,
}

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

// =============================================================================
// API Error
// =============================================================================

/// API error returned from checkout operations.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_PAYMENT",
///   "message": "Insufficient payment: tendered $9.99 against total $10.00"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await submitPayment(orderId, amount);
/// } catch (e) {
///   switch (e.code) {
///     case 'INSUFFICIENT_PAYMENT':
///       highlightKeypad(e.message);
///       break;
///     case 'PAYMENT_RECORDING_FAILED':
///       offerRetry();
///       break;
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (order, catalog item)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed (quantity/size rules)
    CartError,

    /// Checkout attempted on an empty cart
    EmptyCart,

    /// Order lifecycle transition not permitted
    InvalidTransition,

    /// Tender does not cover the order total
    InsufficientPayment,

    /// Order persistence collaborator rejected the submission (retryable)
    OrderSubmissionFailed,

    /// Payment persistence collaborator rejected the record (retryable)
    PaymentRecordingFailed,

    /// Response arrived for a cart that has since moved on; discarded
    SupersededRequest,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Order submission failed at the network boundary; cart untouched.
    pub fn order_submission_failed(err: GatewayError) -> Self {
        tracing::error!(error = %err, "Order submission failed");
        ApiError::new(
            ErrorCode::OrderSubmissionFailed,
            "Order could not be submitted; your cart is unchanged, please retry",
        )
    }

    /// Payment recording failed at the network boundary; nothing committed.
    pub fn payment_recording_failed(err: GatewayError) -> Self {
        tracing::error!(error = %err, "Payment recording failed");
        ApiError::new(
            ErrorCode::PaymentRecordingFailed,
            "Payment could not be recorded; no charge was applied, please retry",
        )
    }

    /// A late response was discarded because the cart moved on.
    pub fn superseded(table_id: &str) -> Self {
        ApiError::new(
            ErrorCode::SupersededRequest,
            format!("Cart for table {table_id} changed while the request was in flight"),
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        let code = match err {
            CoreError::InvalidAmount { .. } => ErrorCode::ValidationError,
            CoreError::InvalidQuantity { .. } => ErrorCode::CartError,
            CoreError::EmptyCart { .. } => ErrorCode::EmptyCart,
            CoreError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            CoreError::InsufficientPayment { .. } => ErrorCode::InsufficientPayment,
            CoreError::OrderNotFound(_) => ErrorCode::NotFound,
            CoreError::CartTooLarge { .. } => ErrorCode::CartError,
            CoreError::QuantityTooLarge { .. } => ErrorCode::CartError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, message)
    }
}

impl From<dinetab_core::ValidationError> for ApiError {
    fn from(err: dinetab_core::ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
