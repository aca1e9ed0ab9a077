use sawit_client::services::SawitApi;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// `datetime-local` style input: minutes precision, no offset.
pub(crate) const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Days between the default start and end of a pay period.
const PAYROLL_PERIOD_DAYS: i64 = 6;

/// Values used for options the user left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputDefaults {
    pub(crate) now: NaiveDateTime,
    /// Numeric id of the logged-in user, if one is stored and parses
    pub(crate) user_id: Option<i64>,
}

impl InputDefaults {
    pub(crate) fn from_session(api: &SawitApi) -> Self {
        let user_id = api
            .auth()
            .get_user_info()
            .and_then(|info| info.id)
            .and_then(|id| id.parse().ok());

        Self {
            now: Local::now().naive_local(),
            user_id,
        }
    }

    pub(crate) fn now_input(&self) -> String {
        format_input(self.now)
    }

    /// Start and end of a pay period, filling in whichever is missing.
    ///
    /// The end defaults to six days after the start. A start that does not
    /// parse counts from now instead.
    pub(crate) fn payroll_period(
        &self,
        start: Option<String>,
        end: Option<String>,
    ) -> (String, String) {
        let start = start.unwrap_or_else(|| self.now_input());
        let end = end.unwrap_or_else(|| {
            let from = NaiveDateTime::parse_from_str(&start, DATETIME_INPUT_FORMAT)
                .unwrap_or(self.now);
            format_input(from + TimeDelta::days(PAYROLL_PERIOD_DAYS))
        });
        (start, end)
    }
}

pub(crate) fn format_input(at: NaiveDateTime) -> String {
    at.format(DATETIME_INPUT_FORMAT).to_string()
}
