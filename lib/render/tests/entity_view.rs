use insta::assert_snapshot;
use quadlens_nquads::parse_entities;
use quadlens_render::{RenderConfig, TermRenderer};
use serde_json::json;
use std::fmt::Write;

const DOCUMENT: &str = r#"
<http://ex.org/job/7> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://ex.org/vocab#Job> <http://ex.org/g> .
<http://ex.org/job/7> <http://www.w3.org/2000/01/rdf-schema#label> "Nightly <sync>"@en <http://ex.org/g> .
<http://ex.org/job/7> <http://ex.org/vocab#retries> "3"^^<http://www.w3.org/2001/XMLSchema#integer> <http://ex.org/g> .
<http://ex.org/job/7> <http://ex.org/vocab#input> _:in <http://ex.org/g> .
"#;

#[test]
fn entity_as_text() {
    let entities = parse_entities(DOCUMENT).unwrap();
    let renderer =
        TermRenderer::new(RenderConfig::default().with_prefix("ex", "http://ex.org/vocab#"));
    let view = renderer.render_entity(entities.get_iri("http://ex.org/job/7").unwrap());

    let mut text = format!("{} in {}\n", view.subject, view.graph);
    for row in &view.rows {
        writeln!(text, "  {} | {} | {}", row.property, row.value, row.graph).unwrap();
    }

    assert_snapshot!(text, @r#"
    http://ex.org/job/7 in http://ex.org/g
      rdf:type | ex:Job | http://ex.org/g
      rdfs:label | "Nightly <sync>"@en | http://ex.org/g
      ex:retries | "3"^^<xsd:integer> | http://ex.org/g
      ex:input | _:in | http://ex.org/g
    "#);
}

#[test]
fn entity_as_html() {
    let entities = parse_entities(DOCUMENT).unwrap();
    let renderer = TermRenderer::new(RenderConfig::default().with_explore_path("/explore"));
    let view = renderer.render_entity(entities.get_iri("http://ex.org/job/7").unwrap());

    assert_snapshot!(view.rows[1].value.to_html(), @r#"<span class="rdf-term"><span class="rdf-literal">&quot;Nightly &lt;sync&gt;&quot;</span><span class="badge rdf-lang">@en</span></span>"#);
    assert_snapshot!(view.rows[2].value.to_html(), @r#"<span class="rdf-term"><span class="rdf-literal">&quot;3&quot;</span><span class="rdf-datatype">^^&lt;</span><a class="rdf-iri" href="/explore?iri=http%3A%2F%2Fwww%2Ew3%2Eorg%2F2001%2FXMLSchema%23integer" title="http://www.w3.org/2001/XMLSchema#integer">xsd:integer</a><span class="rdf-datatype">&gt;</span></span>"#);
    assert!(view.to_html().starts_with("<table class=\"rdf-entity\">\n<caption><a class=\"rdf-iri\" href=\"/explore?iri=http%3A%2F%2Fex%2Eorg%2Fjob%2F7\""));
    assert_eq!(view.to_html().matches("<tr><td>").count(), 4);
}

#[test]
fn blank_entity_subject() {
    let entities =
        parse_entities("_:in <http://ex.org/vocab#table> \"ORDERS\" <http://ex.org/g> .").unwrap();
    let view = TermRenderer::default().render_entity(entities.get_blank("in").unwrap());
    assert_eq!(view.subject.to_string(), "_:in");
    assert!(view.subject.targets().is_empty());
}

#[test]
fn json_terms() {
    let renderer = TermRenderer::default();
    let rendered = [
        json!({"type": "uri", "value": "http://www.w3.org/2002/07/owl#Thing"}),
        json!({"type": "bnode", "value": "b3"}),
        json!({"type": "variable", "value": "item"}),
        json!({"type": "literal", "lexical": "1.5", "datatype": "http://www.w3.org/2001/XMLSchema#decimal"}),
        json!({"type": "typed-literal", "value": "hallo", "xml:lang": "de"}),
    ]
    .iter()
    .map(|term| renderer.render_json(term).unwrap().to_string())
    .collect::<Vec<_>>();

    assert_eq!(
        rendered,
        vec![
            "owl:Thing",
            "_:b3",
            "?item",
            "\"1.5\"^^<xsd:decimal>",
            "\"hallo\"@de",
        ]
    );
    renderer.render_json(&json!({"kind": "uri"})).unwrap_err();
}
