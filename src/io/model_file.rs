use super::error::Error;
use crate::model::compartment::{CompartmentId, DEFAULT_COMPARTMENT_NAME};
use crate::model::data::BngData;
use crate::model::molecule::{ComponentType, ElemMolType, MolKind};
use crate::model::rule::RxnRule;
use crate::model::species::Cplx;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelFile {
    #[serde(default, rename = "molecule_type")]
    molecule_types: Vec<MolTypeEntry>,
    #[serde(default, rename = "compartment")]
    compartments: Vec<CompartmentEntry>,
    #[serde(default, rename = "rule")]
    rules: Vec<RuleEntry>,
    #[serde(default)]
    species: Vec<SpeciesEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MolTypeEntry {
    name: String,
    #[serde(default)]
    kind: KindEntry,
    #[serde(default)]
    diffusion_constant: f64,
    #[serde(default)]
    components: Vec<ComponentEntry>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KindEntry {
    #[default]
    Volume,
    Surface,
    ReactiveSurface,
}

impl From<KindEntry> for MolKind {
    fn from(kind: KindEntry) -> Self {
        match kind {
            KindEntry::Volume => MolKind::Volume,
            KindEntry::Surface => MolKind::Surface,
            KindEntry::ReactiveSurface => MolKind::ReactiveSurface,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentEntry {
    name: String,
    #[serde(default)]
    states: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompartmentEntry {
    name: String,
    dimensions: u8,
    size: f64,
    parent: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleEntry {
    pattern: String,
    rate: f64,
    reactants: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpeciesEntry {
    pattern: String,
    mol_types: Vec<String>,
    #[serde(default)]
    instantiated: bool,
}

/// A species known before the run starts, and whether it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSpecies {
    pub cplx: Cplx,
    pub instantiated: bool,
}

/// Everything a model description file defines.
#[derive(Debug, Clone, Default)]
pub struct ModelDescription {
    pub data: BngData,
    pub species: Vec<SeedSpecies>,
}

/// Reads a TOML model description.
///
/// The default compartment is always present as the first compartment.
/// Compartment parents are referenced by name and may be declared after
/// their children. Reactant names are not checked against the molecule
/// types; rules with unknown reactants are reported at export time.
pub fn read_model<R: Read>(mut reader: R) -> Result<ModelDescription, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let file: ModelFile = toml::from_str(&text).map_err(|e| {
        let line = e
            .span()
            .map(|span| text[..span.start].matches('\n').count() + 1)
            .unwrap_or(0);
        Error::Parse {
            line,
            details: e.message().to_string(),
        }
    })?;

    let mut data = BngData::new();
    add_mol_types(&mut data, file.molecule_types)?;
    add_compartments(&mut data, file.compartments)?;

    for rule in file.rules {
        check_quantity("rule", &rule.pattern, "rate", rule.rate)?;
        data.add_rxn_rule(RxnRule::new(rule.pattern, rule.rate, rule.reactants));
    }

    let species = file
        .species
        .into_iter()
        .map(|s| SeedSpecies {
            cplx: Cplx::new(s.pattern, s.mol_types),
            instantiated: s.instantiated,
        })
        .collect();

    Ok(ModelDescription { data, species })
}

/// Physical quantities end up as BNGL numbers, which must be finite.
fn check_quantity(kind: &str, name: &str, quantity: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::model(format!(
            "{kind} '{name}' has invalid {quantity} {value}"
        )))
    }
}

fn add_mol_types(data: &mut BngData, entries: Vec<MolTypeEntry>) -> Result<(), Error> {
    for entry in entries {
        if data.find_mol_type(&entry.name).is_some() {
            return Err(Error::model(format!(
                "molecule type '{}' is declared twice",
                entry.name
            )));
        }

        check_quantity(
            "molecule type",
            &entry.name,
            "diffusion constant",
            entry.diffusion_constant,
        )?;

        let mut mt = ElemMolType::new(entry.name, entry.kind.into(), entry.diffusion_constant);
        for component in entry.components {
            mt = mt.with_component(ComponentType::new(component.name).with_states(component.states));
        }
        data.add_mol_type(mt);
    }
    Ok(())
}

fn add_compartments(data: &mut BngData, entries: Vec<CompartmentEntry>) -> Result<(), Error> {
    let mut ids: HashMap<String, CompartmentId> = HashMap::new();

    if !entries.iter().any(|e| e.name == DEFAULT_COMPARTMENT_NAME) {
        let id = data.add_compartment(DEFAULT_COMPARTMENT_NAME, true, 0.0, None);
        ids.insert(DEFAULT_COMPARTMENT_NAME.to_string(), id);
    }

    for entry in &entries {
        let is_3d = match entry.dimensions {
            3 => true,
            2 => false,
            other => {
                return Err(Error::model(format!(
                    "compartment '{}' has {} dimensions, expected 2 or 3",
                    entry.name, other
                )));
            }
        };
        check_quantity("compartment", &entry.name, "size", entry.size)?;
        if ids.contains_key(&entry.name) {
            return Err(Error::model(format!(
                "compartment '{}' is declared twice",
                entry.name
            )));
        }

        let id = data.add_compartment(entry.name.clone(), is_3d, entry.size, None);
        ids.insert(entry.name.clone(), id);
    }

    for entry in &entries {
        let Some(parent_name) = &entry.parent else {
            continue;
        };
        let parent = *ids.get(parent_name).ok_or_else(|| {
            Error::model(format!(
                "compartment '{}' names unknown parent '{}'",
                entry.name, parent_name
            ))
        })?;
        let child = ids[&entry.name];
        if !data.set_compartment_parent(child, parent) {
            return Err(Error::model(format!(
                "compartment '{}' cannot be its own parent",
                entry.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MODEL: &str = r#"
[[molecule_type]]
name = "A"
diffusion_constant = 1e-6
components = [{ name = "a", states = ["0", "1"] }]

[[molecule_type]]
name = "R"
kind = "surface"
diffusion_constant = 1e-7

[[compartment]]
name = "CP"
dimensions = 3
size = 0.5
parent = "PM"

[[compartment]]
name = "PM"
dimensions = 2
size = 3.0
parent = "EC"

[[compartment]]
name = "EC"
dimensions = 3
size = 10.0

[[rule]]
pattern = "A(a~0) + R() -> A(a~1) + R()"
rate = 1e7
reactants = ["A", "R"]

[[species]]
pattern = "A(a~0)"
mol_types = ["A"]
instantiated = true
"#;

    #[test]
    fn reads_full_description() {
        let model = read_model(Cursor::new(MODEL)).expect("read model");
        let data = &model.data;

        assert_eq!(data.elem_mol_types.len(), 2);
        assert_eq!(data.elem_mol_types[0].to_bngl(), "A(a~0~1)");
        assert!(data.elem_mol_types[1].is_surf());

        let names: Vec<_> = data.compartments.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, [DEFAULT_COMPARTMENT_NAME, "CP", "PM", "EC"]);

        let cp = data.compartment_by_name("CP").unwrap();
        let pm = data.compartment_by_name("PM").unwrap();
        let ec = data.compartment_by_name("EC").unwrap();
        assert_eq!(cp.parent, Some(pm.id));
        assert_eq!(pm.parent, Some(ec.id));
        assert_eq!(ec.children, vec![pm.id]);
        assert!(!pm.is_3d);

        assert_eq!(data.rxn_rules.len(), 1);
        assert_eq!(data.rxn_rules[0].reactants, ["A", "R"]);
        assert_eq!(model.species.len(), 1);
        assert!(model.species[0].instantiated);
    }

    #[test]
    fn reports_syntax_errors_with_line() {
        let err = read_model(Cursor::new("[[rule]]\npattern = \n")).expect_err("bad toml");
        assert!(matches!(err, Error::Parse { .. }), "{err:?}");
    }

    #[test]
    fn rejects_unknown_parent() {
        let text = "[[compartment]]\nname = \"CP\"\ndimensions = 3\nsize = 1.0\nparent = \"XX\"\n";
        let err = read_model(Cursor::new(text)).expect_err("unknown parent");
        assert!(matches!(err, Error::Model(ref m) if m.contains("XX")));
    }

    #[test]
    fn rejects_bad_dimensions_and_duplicates() {
        let text = "[[compartment]]\nname = \"CP\"\ndimensions = 1\nsize = 1.0\n";
        assert!(matches!(read_model(Cursor::new(text)), Err(Error::Model(_))));

        let text = "[[molecule_type]]\nname = \"A\"\n[[molecule_type]]\nname = \"A\"\n";
        assert!(matches!(read_model(Cursor::new(text)), Err(Error::Model(_))));
    }

    #[test]
    fn rejects_non_finite_or_negative_quantities() {
        let cases = [
            "[[molecule_type]]\nname = \"A\"\ndiffusion_constant = nan\n",
            "[[molecule_type]]\nname = \"A\"\ndiffusion_constant = inf\n",
            "[[molecule_type]]\nname = \"A\"\ndiffusion_constant = -1e-6\n",
            "[[rule]]\npattern = \"A() -> 0\"\nrate = inf\nreactants = [\"A\"]\n",
            "[[rule]]\npattern = \"A() -> 0\"\nrate = nan\nreactants = [\"A\"]\n",
            "[[rule]]\npattern = \"A() -> 0\"\nrate = -2.0\nreactants = [\"A\"]\n",
            "[[compartment]]\nname = \"CP\"\ndimensions = 3\nsize = inf\n",
        ];
        for text in cases {
            let err = read_model(Cursor::new(text)).expect_err(text);
            assert!(matches!(err, Error::Model(_)), "{text}: {err:?}");
        }

        let text = "[[rule]]\npattern = \"A() -> 0\"\nrate = inf\nreactants = [\"A\"]\n";
        let err = read_model(Cursor::new(text)).expect_err("infinite rate");
        assert!(err.to_string().contains("A() -> 0"));
    }

    #[test]
    fn empty_description_has_only_default_compartment() {
        let model = read_model(Cursor::new("")).expect("empty");
        assert_eq!(model.data.compartment_count(), 1);
        assert!(model.data.compartments[0].is_default());
        assert!(model.data.rxn_rules.is_empty());
    }
}
