use crate::scraping::constants::NO_TIMES_MARKER;

/**
The booking page has no structured availability signal, only a sentence
shown when an office is fully booked. A plain substring search is all this
does: if the site rewords or translates that sentence every office will look
available.
*/
pub fn is_unavailable(body: &[u8]) -> bool {
    String::from_utf8_lossy(body).contains(NO_TIMES_MARKER)
}
