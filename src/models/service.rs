use serde::Serialize;

/// A consultation type offered on the booking form.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationService {
    pub id: &'static str,
    pub name: &'static str,
    /// `None` when the length is agreed with the patient.
    pub duration_minutes: Option<u32>,
    /// Whole dollars; `None` means priced on enquiry.
    pub price_dollars: Option<u32>,
    pub description: &'static str,
}

impl ConsultationService {
    pub fn label(&self) -> String {
        match (self.duration_minutes, self.price_dollars) {
            (Some(minutes), Some(price)) => format!("{} ({minutes} min) - ${price}", self.name),
            _ => format!("{} - Contact for pricing", self.name),
        }
    }
}

pub const SERVICES: [ConsultationService; 4] = [
    ConsultationService {
        id: "initial",
        name: "Initial Consultation",
        duration_minutes: Some(30),
        price_dollars: Some(150),
        description: "A comprehensive initial consultation to assess your health needs and create a personalized care plan.",
    },
    ConsultationService {
        id: "followup",
        name: "Follow-Up Consultation",
        duration_minutes: Some(20),
        price_dollars: Some(100),
        description: "Review your progress and adjust your treatment plan as needed.",
    },
    ConsultationService {
        id: "comprehensive",
        name: "Comprehensive Health Assessment",
        duration_minutes: Some(60),
        price_dollars: Some(250),
        description: "In-depth health assessment including detailed examination and personalized wellness recommendations.",
    },
    ConsultationService {
        id: "specialized",
        name: "Specialized Consultation",
        duration_minutes: None,
        price_dollars: None,
        description: "Specialized services tailored to your specific health requirements. Our team will contact you to discuss details and pricing.",
    },
];
