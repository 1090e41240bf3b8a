use std::fmt;

/// Usage statistics over species and reactant classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsReport {
    pub active_species: usize,
    pub total_species: usize,
    pub rxn_classes: usize,
    pub active_reactant_classes: usize,
    pub total_reactant_classes: usize,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[active/total species {}/{}, rxn classes {}, active/total reactant classes {}/{}]",
            self.active_species,
            self.total_species,
            self.rxn_classes,
            self.active_reactant_classes,
            self.total_reactant_classes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_summary_line() {
        let report = StatsReport {
            active_species: 2,
            total_species: 5,
            rxn_classes: 3,
            active_reactant_classes: 1,
            total_reactant_classes: 4,
        };
        assert_eq!(
            report.to_string(),
            "[active/total species 2/5, rxn classes 3, active/total reactant classes 1/4]"
        );
    }
}
