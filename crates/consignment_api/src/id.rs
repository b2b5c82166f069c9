use chrono::{DateTime, Utc};
use rand::Rng;

const CONSIGNMENT_ID_PREFIX: &str = "CNS";

/// Builds `CNS-<unix millis>-<four digit random>`.
pub fn generate_consignment_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: u16 = rng.gen_range(1000..=9999);
    format!(
        "{CONSIGNMENT_ID_PREFIX}-{}-{suffix}",
        now.timestamp_millis()
    )
}

pub fn is_consignment_id(candidate: &str) -> bool {
    let mut parts = candidate.split('-');
    let (Some(prefix), Some(timestamp), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == CONSIGNMENT_ID_PREFIX
        && !timestamp.is_empty()
        && timestamp.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == 4
        && suffix.bytes().all(|b| b.is_ascii_digit())
}
