pub mod availability;
pub mod booking;
pub mod contact;
pub mod lenient;
pub mod service;
pub mod submission;

pub use availability::{AvailabilityResponse, TimeSlotOption, SLOT_CATALOG};
pub use booking::{BookingRecord, BookingRequest, BookingStatus, BOOKINGS_COLLECTION};
pub use contact::{ContactRequest, ContactStatus, ContactSubmission, CONTACT_COLLECTION};
pub use service::{ConsultationService, SERVICES};
pub use submission::{BookingResponse, ContactResponse, SubmissionReceipt, ValidationReport};
