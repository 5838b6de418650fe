use std::io::Write;

use super::builder::{SchemaGraph, row_port};
use super::types::{Category, Entity, Member, Relation};
use crate::config::{CategoryTheme, Theme};
use crate::constants::dot;
use crate::error::GraphqlVizError;
use crate::introspection::FieldDescriptor;
use crate::utils::string::{escape_html, escape_quoted};

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(GraphqlVizError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(GraphqlVizError::from)
    };
}

/// Per-render mutable state
///
/// Cluster ids only need to be unique within one document, so the counter
/// starts over for every render.
#[derive(Debug, Default)]
struct RenderContext {
    next_group_id: usize,
}

impl RenderContext {
    fn next_group_id(&mut self) -> usize {
        let id = self.next_group_id;
        self.next_group_id += 1;
        id
    }
}

/// Renders a [`SchemaGraph`] as a Graphviz DOT document
///
/// Every type becomes a plaintext node holding an HTML-like table: a header
/// cell with the type name and one row per field or enum value, each row
/// carrying a port that edges can attach to.
pub struct DotRenderer<'t> {
    theme: &'t Theme,
}

impl<'t> DotRenderer<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    pub fn render_dot(&self, graph: &SchemaGraph<'_>, output: &mut dyn Write) -> Result<(), GraphqlVizError> {
        let mut context = RenderContext::default();

        writeln_out!(output, "digraph erd {{")?;
        writeln_out!(output, "graph [")?;
        writeln_out!(output, "  rankdir = \"LR\"")?;
        writeln_out!(output, "];")?;
        writeln_out!(output, "node [")?;
        writeln_out!(output, "  fontsize = \"16\"")?;
        writeln_out!(output, "  shape = \"plaintext\"")?;
        writeln_out!(output, "];")?;
        writeln_out!(output, "edge [")?;
        writeln_out!(output, "];")?;
        writeln_out!(output)?;

        for category in Category::ALL {
            let entities: Vec<&Entity> = graph.nodes_in(category).collect();
            if entities.is_empty() {
                continue;
            }
            self.render_category(&mut context, category.theme(self.theme), &entities, output)?;
            writeln_out!(output)?;
        }

        for (from, to, relation) in graph.edges() {
            writeln_out!(output, "{}", self.edge(from, to, relation))?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn render_category(
        &self,
        context: &mut RenderContext,
        category_theme: &CategoryTheme,
        entities: &[&Entity],
        output: &mut dyn Write,
    ) -> Result<(), GraphqlVizError> {
        if category_theme.group {
            writeln_out!(output, "subgraph cluster_{} {{", context.next_group_id())?;
            writeln_out!(output, "color=\"{}\";", escape_quoted(&category_theme.color))?;
            if !category_theme.group_label.is_empty() {
                writeln_out!(output, "label=\"{}\";", escape_quoted(&category_theme.group_label))?;
            }
        }

        for entity in entities {
            writeln_out!(output, "{}", self.table(entity, category_theme))?;
        }

        if category_theme.group {
            writeln_out!(output, "}}")?;
        }
        Ok(())
    }

    fn table(&self, entity: &Entity, category_theme: &CategoryTheme) -> String {
        let color = escape_html(&category_theme.color);
        let invert = self.theme.header.invert;

        let mut table = format!(
            "\"{}\" [label=<<TABLE COLOR=\"{color}\" BORDER=\"0\" CELLBORDER=\"1\" CELLSPACING=\"0\">",
            escape_quoted(entity.display_name())
        );

        let stereotype = match category_theme.stereotype.as_deref() {
            Some(text) if !text.is_empty() && text != "null" => {
                format!("&laquo;{}&raquo;<BR/>", escape_html(text))
            }
            _ => String::new(),
        };
        table.push_str(&format!(
            "<TR><TD PORT=\"{}\"{}><FONT COLOR=\"{}\">{stereotype}<B>{}</B></FONT></TD></TR>",
            dot::HEADER_PORT,
            if invert {
                format!(" BGCOLOR=\"{color}\"")
            } else {
                String::new()
            },
            if invert { "WHITE" } else { color.as_str() },
            escape_html(entity.display_name())
        ));

        if !entity.members.is_empty() {
            let hide_seperators = self.theme.field.hide_seperators;
            if hide_seperators {
                table.push_str(&format!(
                    "<TR><TD><TABLE COLOR=\"{color}\" BORDER=\"0\" CELLBORDER=\"0\" CELLSPACING=\"0\">"
                ));
            }
            for member in &entity.members {
                table.push_str(&format!(
                    "<TR><TD ALIGN=\"{}\" PORT=\"{}\"><FONT COLOR=\"{color}\">{}</FONT></TD></TR>",
                    self.theme.field.align.as_str(),
                    row_port(member.name()),
                    self.member_text(member)
                ));
            }
            if hide_seperators {
                table.push_str("</TABLE></TD></TR>");
            }
        }

        table.push_str("</TABLE>>];");
        table
    }

    /// Row text: `name(arg: Type, ...): Type` plus a deprecation note
    fn member_text(&self, member: &Member) -> String {
        let notes = if member.is_deprecated() {
            format!(
                " <FONT COLOR=\"{}\">{}</FONT>",
                dot::DEPRECATED_COLOR,
                escape_html(
                    member
                        .deprecation_reason()
                        .filter(|reason| !reason.is_empty())
                        .unwrap_or(dot::DEPRECATED_FALLBACK)
                )
            )
        } else {
            String::new()
        };

        match member {
            Member::Value(value) => format!("{}{notes}", value.name),
            Member::Field(field) => format!(
                "{}{}: {}{notes}",
                field.name,
                self.argument_list(field),
                field.type_expression()
            ),
        }
    }

    fn argument_list(&self, field: &FieldDescriptor) -> String {
        if self.theme.field.noargs || field.args.is_empty() {
            return String::new();
        }

        let color = (self.theme.field.color_args && !self.theme.inputs.hide)
            .then(|| escape_html(&self.theme.inputs.color));

        let args: Vec<String> = field
            .args
            .iter()
            .map(|arg| {
                let text = format!("{}: {}", arg.name, arg.type_expression());
                match &color {
                    Some(color) => format!("<FONT COLOR=\"{color}\">{text}</FONT>"),
                    None => text,
                }
            })
            .collect();

        format!("({})", args.join(", "))
    }

    fn edge(&self, from: &Entity, to: &Entity, relation: &Relation) -> String {
        let endpoint = |entity: &Entity, port: &Option<String>| match port {
            Some(port) => format!("\"{}\":{port}", escape_quoted(entity.display_name())),
            None => format!("\"{}\"", escape_quoted(entity.display_name())),
        };

        let mut attributes = Vec::new();
        if !relation.color.is_empty() {
            let color = escape_quoted(&relation.color);
            attributes.push(format!("color=\"{color}\""));
            attributes.push(format!("fontcolor=\"{color}\""));
        }
        if let Some(label) = &relation.label {
            attributes.push(format!("label=\"{}\"", escape_quoted(label)));
        }
        if let Some(weight) = relation.weight {
            attributes.push(format!("weight={weight}"));
        }

        let from = endpoint(from, &relation.from_port);
        let to = endpoint(to, &relation.to_port);
        if attributes.is_empty() {
            format!("{from} -> {to};")
        } else {
            format!("{from} -> {to} [{}];", attributes.join(" "))
        }
    }
}
