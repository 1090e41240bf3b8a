use std::io::{self, Write};

use bngl_bridge::{BngData, MolKind, RxnClass, StatsReport};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_model_summary(data: &BngData) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let count_kind = |kind: MolKind| {
        data.elem_mol_types
            .iter()
            .filter(|mt| mt.kind == kind)
            .count()
    };
    let count_class = |class: RxnClass| {
        data.rxn_rules
            .iter()
            .filter(|rule| RxnClass::classify(rule, data) == class)
            .count()
    };

    let rows = vec![
        ("Volume Molecules", count_kind(MolKind::Volume).to_string()),
        ("Surface Molecules", count_kind(MolKind::Surface).to_string()),
        (
            "Reactive Surfaces",
            count_kind(MolKind::ReactiveSurface).to_string(),
        ),
        (
            "Compartments",
            data.compartments
                .iter()
                .filter(|c| !c.is_default())
                .count()
                .to_string(),
        ),
        ("Unimolecular", count_class(RxnClass::Unimol).to_string()),
        ("Volume Bimol.", count_class(RxnClass::VolumeBimol).to_string()),
        (
            "Surface Bimol.",
            count_class(RxnClass::SurfaceBimol).to_string(),
        ),
        (
            "Unsupported",
            data.rxn_rules
                .iter()
                .filter(|rule| !RxnClass::classify(rule, data).is_exportable())
                .count()
                .to_string(),
        ),
    ];

    print_kv_table(&mut out, "Model Summary", &rows);
}

pub fn print_stats(report: &StatsReport) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows: Vec<(&str, String, String)> = vec![
        (
            "Species",
            report.active_species.to_string(),
            report.total_species.to_string(),
        ),
        (
            "Reactant Classes",
            report.active_reactant_classes.to_string(),
            report.total_reactant_classes.to_string(),
        ),
        ("Rxn Classes", "-".to_string(), report.rxn_classes.to_string()),
    ];

    let _ = writeln!(out, "{}┌─ Usage Statistics ─┐", INDENT);
    let _ = writeln!(out, "{}┌──────────────────┬────────┬────────┐", INDENT);
    let _ = writeln!(out, "{}│ Category         │ Active │  Total │", INDENT);
    let _ = writeln!(out, "{}├──────────────────┼────────┼────────┤", INDENT);

    for (cat, active, total) in &rows {
        let _ = writeln!(out, "{}│ {:<16} │ {:>6} │ {:>6} │", INDENT, cat, active, total);
    }

    let _ = writeln!(out, "{}└──────────────────┴────────┴────────┘", INDENT);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 18usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Item", "Count",
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
