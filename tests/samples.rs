//! The sample corpus end to end: clean parses, declaration outlines and every output format

use daedalus_parser::daedalus::ast::{extract_declarations, snapshot_from_program};
use daedalus_parser::daedalus::formats::{snapshot_from_json, snapshot_from_yaml, FormatRegistry};
use daedalus_parser::daedalus::testing::{assert_diagnostics, assert_program, Samples};

#[test]
fn test_clean_samples_parse_without_diagnostics() {
    for sample in Samples::clean() {
        let result = sample.parse();
        assert!(
            result.diagnostics.is_empty(),
            "{}: {:?}",
            sample.file_name(),
            result.diagnostics
        );
        assert_program(&result.program).no_errors();
        assert!(result.clone().into_result().is_ok());
    }
}

#[test]
fn test_kitchensink_outline() {
    let result = Samples::KitchenSink.parse();
    let outline: Vec<String> = extract_declarations(&result.program)
        .iter()
        .map(ToString::to_string)
        .collect();
    insta::assert_snapshot!(outline.join("\n"), @r"
    constant LOG_MISSION: int
    constant TOPIC_Gold: string
    variable MIS_Gold: int
    class C_Info
    prototype Mst_Default_Wolf(C_NPC)
    instance Wolf(Mst_Default_Wolf)
    function DIA_Hero_Gold_Condition: int
    function DIA_Hero_Gold_Info: void
    ");
}

#[test]
fn test_kitchensink_bodies() {
    let result = Samples::KitchenSink.parse();
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program)
        .declaration_count(8)
        .declaration(3, |d| {
            d.assert_class().name("C_Info").member_count(5);
        })
        .declaration(5, |d| {
            d.assert_instance().name("Wolf").body(|b| {
                b.statement_count(2).statement(1, |s| {
                    s.assert_expression()
                        .assert_call()
                        .callee("Npc_SetToFistMode")
                        .argument_count(1);
                });
            });
        })
        .declaration(6, |d| {
            d.assert_function().return_type("int").body(|b| {
                b.statement_count(2)
                    .statement(0, |s| {
                        s.assert_if()
                            .condition(|c| {
                                c.assert_parenthesized().assert_binary("&&");
                            })
                            .consequence(|c| {
                                c.assert_block().statement(0, |r| {
                                    r.assert_return().value(|v| {
                                        v.boolean(true);
                                    });
                                });
                            });
                    })
                    .statement(1, |s| {
                        s.assert_return().value(|v| {
                            v.boolean(false);
                        });
                    });
            });
        })
        .declaration(7, |d| {
            d.assert_function().name("DIA_Hero_Gold_Info").body(|b| {
                b.statement_count(5)
                    .statement(2, |s| {
                        s.assert_if().alternative(|alt| {
                            alt.assert_block().statement_count(1);
                        });
                    })
                    .statement(4, |s| {
                        s.assert_assignment().left(|e| {
                            e.assert_array_access().array(|a| {
                                a.assert_member_access()
                                    .object(|o| {
                                        o.identifier("hero");
                                    })
                                    .member("attribute");
                            });
                        });
                    });
            });
        });
}

#[test]
fn test_kitchensink_comments_are_kept() {
    let result = Samples::KitchenSink.parse();
    let source = Samples::KitchenSink.source();
    let comments = result.comments();
    assert_eq!(comments.len(), 2);
    assert!(comments[0].text(source).starts_with("/*"));
    assert_eq!(comments[1].text(source), "//Here is your gold.");
}

#[test]
fn test_every_format_serializes_every_sample() {
    let registry = FormatRegistry::with_defaults();
    for sample in Samples::ALL {
        let result = sample.parse();
        for format in registry.list_formats() {
            let output = registry
                .serialize(&result.program, &format)
                .unwrap_or_else(|e| panic!("{} as {}: {}", sample.file_name(), format, e));
            assert!(!output.is_empty(), "{} as {}", sample.file_name(), format);
        }
    }
}

#[test]
fn test_serialized_formats_read_back() {
    let registry = FormatRegistry::with_defaults();
    for sample in Samples::ALL {
        let program = sample.parse().program;
        let expected = snapshot_from_program(&program);

        let json = registry.serialize(&program, "json").unwrap();
        assert_eq!(snapshot_from_json(&json).unwrap(), expected, "{}", sample.file_name());

        let yaml = registry.serialize(&program, "yaml").unwrap();
        assert_eq!(snapshot_from_yaml(&yaml).unwrap(), expected, "{}", sample.file_name());
    }
}

#[test]
fn test_treeviz_has_one_line_per_node() {
    let registry = FormatRegistry::with_defaults();
    for sample in Samples::ALL {
        let program = sample.parse().program;
        let treeviz = registry.serialize(&program, "treeviz").unwrap();
        assert_eq!(
            treeviz.lines().count(),
            snapshot_from_program(&program).node_count(),
            "{}",
            sample.file_name()
        );
    }
}

#[test]
fn test_sexp_marks_recovery_nodes() {
    let registry = FormatRegistry::with_defaults();
    let program = Samples::Recovery.parse().program;
    let sexp = registry.serialize(&program, "sexp").unwrap();
    assert!(sexp.starts_with("(program "));
    assert!(sexp.contains("(MISSING "));
    assert!(sexp.contains("(ERROR"));
}

#[test]
fn test_samples_parse_on_separate_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<daedalus_parser::daedalus::ParseResult>();

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = Samples::ALL
            .iter()
            .map(|&sample| scope.spawn(move || sample.parse().program.len()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("parser thread"))
            .collect()
    });
    let sequential: Vec<usize> = Samples::ALL
        .iter()
        .map(|sample| sample.parse().program.len())
        .collect();
    assert_eq!(counts, sequential);
}
