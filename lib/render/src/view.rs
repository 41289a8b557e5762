use crate::Fragment;

/// One row of an entity table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRow {
    pub property: Fragment,
    pub value: Fragment,
    pub graph: Fragment,
}

/// A rendered entity: its subject, the graph it was first seen in and one row per triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityView {
    pub subject: Fragment,
    pub graph: Fragment,
    pub rows: Vec<EntityRow>,
}

impl EntityView {
    /// Writes the entity as an HTML table.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"rdf-entity\">\n<caption>");
        self.subject.write_html(&mut html);
        html.push_str(" in ");
        self.graph.write_html(&mut html);
        html.push_str("</caption>\n<thead><tr><th>Property</th><th>Value</th><th>Graph</th></tr></thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in [&row.property, &row.value, &row.graph] {
                html.push_str("<td>");
                cell.write_html(&mut html);
                html.push_str("</td>");
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");
        html
    }
}
