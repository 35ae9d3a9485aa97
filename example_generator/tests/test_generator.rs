#[cfg(test)]
mod tests {
    use examplegen::{
        ComplexTypeDef, ElementDef, GenerationContext, SchemaModel, generate,
        generate_with_context, generate_with_namespace,
    };
    use quick_xml::Reader;
    use quick_xml::events::Event;

    const WORDS: [&str; 10] = [
        "colour",
        "flavour",
        "behaviour",
        "humour",
        "labour",
        "neighbour",
        "rumour",
        "splendour",
        "vigour",
        "valour",
    ];

    fn pet_model() -> SchemaModel {
        let mut model = SchemaModel::new();
        model.insert_element(ElementDef::new("pet", "petType"));
        model.insert_complex_type(ComplexTypeDef::new(
            "petType",
            vec![
                ElementDef::new("id", "xs:int"),
                ElementDef::new("name", "xs:string"),
            ],
        ));
        model
    }

    fn inner_text<'a>(line: &'a str, tag: &str) -> &'a str {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        line.trim_start()
            .strip_prefix(open.as_str())
            .and_then(|rest| rest.strip_suffix(close.as_str()))
            .unwrap_or_else(|| panic!("line {line:?} is not a {tag} element"))
    }

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => panic!("output is not well-formed XML: {err}"),
            }
        }
    }

    #[test]
    fn generates_nested_members_with_indentation() {
        let xml = generate(&pet_model(), "pet");

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], "<pet>");
        assert!(lines[1].starts_with("  <id>"));
        assert!(lines[2].starts_with("  <name>"));
        assert_eq!(lines[3], "</pet>");
        assert!(xml.ends_with('\n'));

        let id: i64 = inner_text(lines[1], "id").parse().unwrap();
        assert!((0..100).contains(&id));
        assert!(WORDS.contains(&inner_text(lines[2], "name")));
    }

    #[test]
    fn generates_namespaced_tags_with_root_declaration() {
        let xml = generate_with_namespace(&pet_model(), "pet", "urn:x", "p");

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], "<p:pet xmlns:p=\"urn:x\">");
        assert!(lines[1].starts_with("  <p:id>") && lines[1].ends_with("</p:id>"));
        assert!(lines[2].starts_with("  <p:name>") && lines[2].ends_with("</p:name>"));
        assert_eq!(lines[3], "</p:pet>");
    }

    #[test]
    fn namespace_declaration_requires_both_namespace_and_prefix() {
        let with_prefix_only = generate_with_namespace(&pet_model(), "pet", "", "p");
        assert!(with_prefix_only.starts_with("<p:pet>"));

        let with_namespace_only = generate_with_namespace(&pet_model(), "pet", "urn:x", "");
        assert!(with_namespace_only.starts_with("<pet>"));
        assert!(!with_namespace_only.contains("xmlns"));
    }

    #[test]
    fn every_tag_carries_the_prefix() {
        let xml = generate_with_namespace(&pet_model(), "pet", "urn:x", "p");

        for line in xml.lines() {
            let tag = line.trim_start();
            assert!(
                tag.starts_with("<p:") || tag.starts_with("</p:"),
                "unqualified tag in {line:?}"
            );
        }
    }

    #[test]
    fn missing_element_returns_a_comment() {
        let xml = generate(&pet_model(), "unicorn");
        assert_eq!(xml, "<!-- Element unicorn not found -->");
    }

    #[test]
    fn empty_type_is_self_closing() {
        let mut model = SchemaModel::new();
        model.insert_element(ElementDef::new("spayed", ""));

        assert_eq!(generate(&model, "spayed"), "<spayed/>\n");
    }

    #[test]
    fn empty_type_with_namespace_is_self_closing() {
        let mut model = SchemaModel::new();
        model.insert_element(ElementDef::new("spayed", ""));

        let xml = generate_with_namespace(&model, "spayed", "urn:x", "p");
        assert_eq!(xml, "<p:spayed xmlns:p=\"urn:x\"/>\n");
    }

    #[test]
    fn empty_typed_members_are_self_closing() {
        let mut model = SchemaModel::new();
        model.insert_element(ElementDef::new("pet", "petType"));
        model.insert_complex_type(ComplexTypeDef::new(
            "petType",
            vec![ElementDef::new("microchip", "")],
        ));

        let xml = generate(&model, "pet");
        assert_eq!(xml, "<pet>\n  <microchip/>\n</pet>\n");
    }

    #[test]
    fn nested_complex_types_expand_at_every_depth() {
        let mut model = SchemaModel::new();
        model.insert_element(ElementDef::new("person", "personType"));
        model.insert_complex_type(ComplexTypeDef::new(
            "personType",
            vec![
                ElementDef::new("name", "xs:string"),
                ElementDef::new("address", "addressType"),
            ],
        ));
        model.insert_complex_type(ComplexTypeDef::new(
            "addressType",
            vec![ElementDef::new("city", "xs:string")],
        ));

        let xml = generate(&model, "person");

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], "<person>");
        assert!(lines[1].starts_with("  <name>"));
        assert_eq!(lines[2], "  <address>");
        assert!(lines[3].starts_with("    <city>"));
        assert_eq!(lines[4], "  </address>");
        assert_eq!(lines[5], "</person>");
        assert_well_formed(&xml);
    }

    #[test]
    fn unknown_custom_types_are_rendered_as_text() {
        let mut model = SchemaModel::new();
        model.insert_element(ElementDef::new("pet", "petKind"));

        let xml = generate(&model, "pet");
        let lines: Vec<&str> = xml.lines().collect();
        assert!(WORDS.contains(&inner_text(lines[0], "pet")));
    }

    #[test]
    fn recursive_schema_terminates_within_the_element_limit() {
        let mut model = SchemaModel::new();
        model.insert_element(ElementDef::new("node", "nodeType"));
        model.insert_complex_type(ComplexTypeDef::new(
            "nodeType",
            vec![ElementDef::new("node", "nodeType")],
        ));

        let xml = generate(&model, "node");

        let opens = xml.matches("<node>").count();
        let closes = xml.matches("</node>").count();
        assert_eq!(opens, closes);
        assert!(opens <= 1001, "expected truncation, got {opens} elements");
        assert_well_formed(&xml);
    }

    #[test]
    fn seeded_contexts_are_deterministic() {
        let mut model = pet_model();
        model.insert_element(ElementDef::new("stats", "statsType"));
        model.insert_complex_type(ComplexTypeDef::new(
            "statsType",
            vec![
                ElementDef::new("weight", "xs:decimal"),
                ElementDef::new("vaccinated", "xs:boolean"),
                ElementDef::new("age", "xs:int"),
            ],
        ));

        let first = generate_with_context(&model, "stats", GenerationContext::seeded(42));
        let second = generate_with_context(&model, "stats", GenerationContext::seeded(42));
        assert_eq!(first, second);
    }

    #[test]
    fn output_is_well_formed_xml() {
        assert_well_formed(&generate(&pet_model(), "pet"));
        assert_well_formed(&generate_with_namespace(&pet_model(), "pet", "urn:x", "p"));
    }
}
