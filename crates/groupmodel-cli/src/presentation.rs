use groupmodel_engine::RenderedForm;
use groupmodel_types::PresentationNode;
use owo_colors::OwoColorize;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Indented depth-first outline of a rendered form.
pub fn format_outline(rendered: &RenderedForm, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}]",
        highlight(&rendered.label, color),
        rendered.identifier
    );

    for group in &rendered.groups {
        write_node(&mut out, group, 1, color);
    }

    out
}

fn write_node(out: &mut String, root: &PresentationNode, base_depth: usize, color: bool) {
    for (depth, node) in root.walk() {
        let pad = INDENT.repeat(base_depth + depth);
        let _ = writeln!(
            out,
            "{}{} [{}]",
            pad,
            highlight(node.label(), color),
            node.identifier()
        );

        for field in node.fields() {
            let _ = writeln!(out, "{}{}{}: {}", pad, INDENT, field.label, field.value);
        }
    }
}

fn highlight(label: &str, color: bool) -> String {
    if color {
        label.bold().to_string()
    } else {
        label.to_string()
    }
}
