use crate::aspects::AspectCalculator;
use crate::chart::types::{BirthData, NatalChart};
use crate::ephemeris::angles::{culmination_angle, rising_angle};
use crate::ephemeris::bodies::approximate_all;
use crate::ephemeris::time::{parse_birth_date, parse_birth_time, to_time_reference};
use crate::ephemeris::types::Body;
use crate::error::ChartError;
use crate::settings::ChartSettings;
use chrono::{NaiveDate, NaiveTime};

/// Builds natal charts from birth data. Holds only settings; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct ChartAssembler {
    settings: ChartSettings,
    calculator: AspectCalculator,
}

impl ChartAssembler {
    pub fn new(settings: ChartSettings) -> Self {
        let calculator = AspectCalculator::with_mode(settings.aspect_mode);
        Self {
            settings,
            calculator,
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Assemble a chart from raw birth strings.
    ///
    /// `birth_place` is accepted for the record only; the current angle
    /// formulas do not consume coordinates.
    pub fn assemble(
        &self,
        birth_date: &str,
        birth_time: &str,
        birth_place: &str,
    ) -> Result<NatalChart, ChartError> {
        let date = parse_birth_date(birth_date)?;
        let time = parse_birth_time(birth_time)?;
        log::debug!(
            "assembling chart for {} {} (place {:?} not used by angle formulas)",
            date,
            time,
            birth_place
        );
        self.assemble_at(date, time)
    }

    pub fn assemble_birth(&self, birth: &BirthData) -> Result<NatalChart, ChartError> {
        let time = birth
            .birth_time
            .as_deref()
            .unwrap_or(&self.settings.default_birth_time);
        self.assemble(&birth.birth_date, time, &birth.birth_place)
    }

    /// Assemble from already-validated calendar values.
    pub fn assemble_at(&self, date: NaiveDate, time: NaiveTime) -> Result<NatalChart, ChartError> {
        let time_ref = to_time_reference(date, time);

        // Phase 1: raw longitudes and angles
        let raw = approximate_all(time_ref);
        let ascendant = rising_angle(time_ref, time);
        let midheaven = culmination_angle(time_ref);

        // Phase 2: houses, aspects, elements
        let chart = NatalChart::from_raw(
            time_ref,
            &raw,
            ascendant.longitude,
            midheaven.longitude,
            &self.calculator,
        )?;

        log::debug!(
            "chart jd={} asc={} sun={} aspects={}",
            time_ref,
            chart.ascendant().sign,
            chart.position(Body::Sun).sign,
            chart.aspects().len()
        );
        Ok(chart)
    }
}
