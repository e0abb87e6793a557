//! Error recovery: broken input still yields a complete tree and precise diagnostics

use daedalus_parser::daedalus::ast::{extract_declarations, AstNode, DiagnosticCode, NodeKind};
use daedalus_parser::daedalus::parsing::{parse, parse_with_options, validate, ParseOptions};
use daedalus_parser::daedalus::testing::{assert_diagnostics, assert_program, Samples};

#[test]
fn test_recovery_sample_keeps_every_declaration() {
    let result = Samples::Recovery.parse();
    assert!(result.has_errors());

    let names: Vec<String> = extract_declarations(&result.program)
        .into_iter()
        .map(|summary| summary.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Broken_Missing_Semicolon",
            "Broken_Garbage",
            "STILL_PARSED",
            "Broken_Unclosed",
            "Recovered",
        ]
    );

    assert_diagnostics(&result.diagnostics)
        .sorted()
        .contains_code(DiagnosticCode::ExpectedToken)
        .contains_code(DiagnosticCode::StrayOperator);
}

#[test]
fn test_recovery_sample_details() {
    let result = Samples::Recovery.parse();
    let source = Samples::Recovery.source();

    assert_program(&result.program)
        .declaration(0, |d| {
            // The missing `;` is inserted, both assignments survive
            d.assert_instance().body(|b| {
                b.statement_count(2)
                    .statement(1, |s| {
                        s.assert_assignment().left(|e| {
                            e.identifier("level");
                        });
                    });
            });
        })
        .declaration(1, |d| {
            d.assert_function().body(|b| {
                b.statement_count(3)
                    .statement(0, |s| {
                        s.assert_assignment().right(|e| {
                            e.assert_binary("+").right(|r| {
                                r.missing();
                            });
                        });
                    })
                    .statement(2, |s| {
                        s.assert_error().text(source, "| SENSE_SEE;");
                    });
            });
        })
        .declaration(2, |d| {
            d.assert_error().text(source, "} ;");
        })
        .declaration(3, |d| {
            d.assert_error().text(source, "};");
        })
        .declaration(4, |d| {
            d.assert_variable().name("STILL_PARSED");
        })
        .declaration(5, |d| {
            d.assert_function().name("Broken_Unclosed").body(|b| {
                b.statement(0, |s| {
                    s.assert_if().consequence(|c| {
                        c.assert_block().statement_count(1);
                    });
                });
            });
        })
        .declaration(6, |d| {
            d.assert_instance().name("Recovered").body(|b| {
                b.statement_count(1);
            });
        });
}

#[test]
fn test_missing_semicolon_is_reported_at_end_of_previous_token() {
    let source = "instance A(B)\n{\n\tname = \"Broken\"\n\tlevel = 5;\n};";
    let result = parse(source);
    let end_of_string = source.find("\"Broken\"").map(|i| i + 8).unwrap();
    assert_diagnostics(&result.diagnostics)
        .count(1)
        .diagnostic(0, |d| {
            d.message("expected `;`, found identifier")
                .at(end_of_string)
                .starts_at(2, 16);
        });
}

#[test]
fn test_missing_semicolon_before_statement_on_same_line() {
    let source = "func void f() { x = 1 y = 2; z(); };";
    let result = parse(source);
    assert_diagnostics(&result.diagnostics)
        .count(1)
        .diagnostic(0, |d| {
            d.message("expected `;`, found identifier").at(21);
        });
    assert_program(&result.program).declaration(0, |d| {
        d.assert_function().body(|b| {
            b.statement_count(3)
                .statement(0, |s| {
                    s.assert_assignment().left(|e| {
                        e.identifier("x");
                    });
                })
                .statement(1, |s| {
                    s.assert_assignment().left(|e| {
                        e.identifier("y");
                    });
                })
                .statement(2, |s| {
                    s.assert_expression().assert_call().callee("z");
                });
        });
    });
}

#[test]
fn test_unclosed_block_reports_once() {
    let result = parse("func void f()\n{\n\tif (x) { y = 1;\n\ninstance R(C) { };");
    assert_diagnostics(&result.diagnostics)
        .count(1)
        .diagnostic(0, |d| {
            d.message("expected `}`, found `instance`");
        });
    assert_program(&result.program).declaration_count(2);
}

#[test]
fn test_invalid_assignment_target() {
    let result = parse("func void f() { 1 = 2; f() += 3; };");
    assert_diagnostics(&result.diagnostics)
        .count(2)
        .diagnostic(0, |d| {
            d.code(DiagnosticCode::InvalidAssignmentTarget);
        })
        .diagnostic(1, |d| {
            d.code(DiagnosticCode::InvalidAssignmentTarget);
        });
    assert_program(&result.program).declaration(0, |d| {
        d.assert_function().body(|b| {
            b.statement_count(2).statement(0, |s| {
                s.assert_assignment().left(|e| {
                    e.number("1");
                });
            });
        });
    });
}

#[test]
fn test_error_nodes_keep_skipped_tokens() {
    let source = "var int x; @@ ; var int y;";
    let result = parse(source);
    let error = result
        .root()
        .descendants()
        .into_iter()
        .find(|node| node.kind() == NodeKind::Error)
        .expect("error node");
    assert!(!error.is_missing());
    assert_eq!(error.text(source), "@@ ;");
    assert_program(&result.program).declaration_count(3);
}

#[test]
fn test_every_node_is_inside_its_parent() {
    for sample in Samples::ALL {
        let result = sample.parse();
        let root = result.program.syntax();
        for node in root.descendants() {
            for child in node.named_children() {
                assert!(
                    child.range().span.start >= node.range().span.start
                        && child.range().span.end <= node.range().span.end,
                    "{}: {} escapes {}",
                    sample.file_name(),
                    child.kind(),
                    node.kind()
                );
            }
        }
    }
}

#[test]
fn test_max_diagnostics_truncates() {
    let options = ParseOptions::default().with_max_diagnostics(1);
    let result = parse_with_options(Samples::Recovery.source(), &options);
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.diagnostics_truncated);
    assert!(result.error_count > 1);
    assert!(result.into_result().is_err());
}

#[test]
fn test_zero_max_diagnostics_still_rejects_broken_source() {
    let options = ParseOptions::default().with_max_diagnostics(0);
    let result = parse_with_options(Samples::Recovery.source(), &options);
    assert_diagnostics(&result.diagnostics).none();
    assert!(result.has_errors());
    assert!(result.into_result().is_err());
}

#[test]
fn test_validate_samples() {
    for sample in Samples::ALL {
        let report = validate(sample.source());
        assert_eq!(report.is_valid, sample.is_clean(), "{}", sample.file_name());
        assert_eq!(report.stats.source_len, sample.source().len());
    }
}
