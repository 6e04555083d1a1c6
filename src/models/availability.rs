use chrono::NaiveTime;
use serde::Serialize;

/// The daily slots offered for booking, in display order.
pub const SLOT_CATALOG: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeSlotOption {
    pub value: String,
    pub label: String,
}

/// Catalog slots not present in `booked`, keeping catalog order.
pub fn available_slots<'a, I>(booked: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let booked: Vec<&str> = booked.into_iter().collect();
    SLOT_CATALOG
        .iter()
        .filter(|slot| !booked.contains(*slot))
        .map(|slot| slot.to_string())
        .collect()
}

/// 12-hour label for a `HH:MM` slot, e.g. `13:00` -> `1:00 PM`.
pub fn slot_label(slot: &str) -> String {
    match NaiveTime::parse_from_str(slot, "%H:%M") {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => slot.to_string(),
    }
}

pub fn slot_options() -> Vec<TimeSlotOption> {
    SLOT_CATALOG
        .iter()
        .map(|slot| TimeSlotOption {
            value: slot.to_string(),
            label: slot_label(slot),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AvailabilityResponse {
    pub fn available(date: &str, slots: Vec<String>) -> Self {
        Self {
            success: true,
            available_slots: Some(slots),
            date: Some(date.to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            available_slots: None,
            date: None,
            error: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bookings_leaves_full_catalog() {
        let slots = available_slots(std::iter::empty());
        assert_eq!(slots.len(), 8);
        assert_eq!(slots, SLOT_CATALOG.to_vec());
    }

    #[test]
    fn test_booked_slots_removed_in_catalog_order() {
        let slots = available_slots(["14:00", "09:00"]);
        assert_eq!(
            slots,
            vec!["10:00", "11:00", "12:00", "13:00", "15:00", "16:00"]
        );
    }

    #[test]
    fn test_unknown_booked_values_ignored() {
        let slots = available_slots(["", "9am", "17:00"]);
        assert_eq!(slots.len(), 8);
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(slot_label("09:00"), "9:00 AM");
        assert_eq!(slot_label("12:00"), "12:00 PM");
        assert_eq!(slot_label("13:00"), "1:00 PM");
        assert_eq!(slot_label("16:00"), "4:00 PM");
        assert_eq!(slot_label("noon"), "noon");
    }

    #[test]
    fn test_slot_options_follow_catalog() {
        let options = slot_options();
        assert_eq!(options.len(), SLOT_CATALOG.len());
        assert_eq!(options[0].value, "09:00");
        assert_eq!(options[0].label, "9:00 AM");
    }

    #[test]
    fn test_failed_response_omits_slots() {
        let json = serde_json::to_value(AvailabilityResponse::failed("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("availableSlots").is_none());
    }
}
