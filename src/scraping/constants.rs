// booking site inputs
pub const BASE_URL: &str = "https://www.migrationsverket.se/ansokanbokning/valjtyp";

// static query parameters, in the order the site emits them
pub const LANGUAGE_PARAM: (&str, &str) = ("sprak", "sv");
pub const BOOKING_TYPE_PARAM: (&str, &str) = ("bokningstyp", "2");
pub const OFFICE_PARAM: &str = "enhet";
pub const APPLICANT_PARAM: (&str, &str) = ("sokande", "3");

// text shown on the booking page when an office has nothing to offer
pub const NO_TIMES_MARKER: &str = "Det finns inte lediga tider";

pub const FETCH_TIMEOUT_SECS: u64 = 3;
pub const SEND_TIMEOUT_SECS: u64 = 10;

// office name -> remote office code
pub const OFFICES: &[(&str, &str)] = &[("göteborg", "Z102"), ("sundbyberg", "Z209")];

// offices that are checked but never notified about
pub const SUPPRESSED_OFFICES: &[&str] = &["göteborg"];

// mail inputs
pub const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v3";
pub const SENDER_LOCAL_PART: &str = "lediga.tider";
pub const RECIPIENT_LOCAL_PART: &str = "migrationsverket";
pub const SUBJECT_PREFIX: &str = "lediga tider för";
