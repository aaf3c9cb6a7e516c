use crate::BookingDto;

use serde::Serialize;

/// Checkout session response.
///
/// Payment integration is out of scope; the session id identifies the
/// recorded booking so a payment layer can pick it up later.
#[derive(Debug, Serialize)]
pub struct CheckoutSessionResponse {
    pub session_id: String,
    pub booking: BookingDto,
}
