//! Declarations parsed from the sample corpus and small inline snippets

use daedalus_parser::daedalus::ast::{AssignmentOperator, VariableKind};
use daedalus_parser::daedalus::parsing::parse;
use daedalus_parser::daedalus::testing::{assert_diagnostics, assert_program, Samples};

#[test]
fn test_instances_sample() {
    let result = Samples::Instances.parse();
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program)
        .declaration_count(3)
        .no_errors()
        .declaration(0, |d| {
            d.assert_instance()
                .name("PC_Hero")
                .parent("C_NPC")
                .body(|b| {
                    b.statement_count(12)
                        .statement(0, |s| {
                            s.assert_assignment()
                                .left(|e| {
                                    e.identifier("name");
                                })
                                .right(|e| {
                                    e.string("Ich");
                                });
                        })
                        .statement(6, |s| {
                            s.assert_assignment().left(|e| {
                                e.assert_array_access()
                                    .array(|a| {
                                        a.identifier("attribute");
                                    })
                                    .index(|i| {
                                        i.identifier("ATR_STRENGTH");
                                    });
                            });
                        })
                        .statement(10, |s| {
                            s.assert_expression()
                                .assert_call()
                                .callee("Mdl_SetVisual")
                                .argument_count(2);
                        });
                });
        })
        .declaration(1, |d| {
            d.assert_instance().name("ItMi_Gold").body(|b| {
                b.statement_count(8);
            });
        })
        .declaration(2, |d| {
            d.assert_instance()
                .name("Pal_200_Hagen")
                .parent("Npc_Default")
                .forward();
        });
}

#[test]
fn test_prototypes_sample() {
    let result = Samples::Prototypes.parse();
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program)
        .declaration_count(2)
        .declaration(0, |d| {
            d.assert_prototype()
                .name("Npc_Default")
                .parent("C_NPC")
                .body(|b| {
                    b.statement_count(10).statement(8, |s| {
                        s.assert_assignment().right(|e| {
                            e.assert_binary("+").right(|r| {
                                r.identifier("SENSE_SMELL");
                            });
                        });
                    });
                });
        })
        .declaration(1, |d| {
            d.assert_prototype().name("ItemPR_Potion").body(|b| {
                b.statement_count(2);
            });
        });
}

#[test]
fn test_functions_sample() {
    let result = Samples::Functions.parse();
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program)
        .declaration_count(4)
        .declaration(0, |d| {
            d.assert_function()
                .return_type("void")
                .name("Startup_Global")
                .parameter_count(0);
        })
        .declaration(1, |d| {
            d.assert_function()
                .return_type("int")
                .parameter_count(1)
                .parameter(0, |p| {
                    p.qualifier(VariableKind::Var).type_name("C_NPC").name("slf");
                })
                .body(|b| {
                    b.statement_count(2)
                        .statement(0, |s| {
                            s.assert_if()
                                .condition(|c| {
                                    c.assert_parenthesized().assert_call();
                                })
                                .consequence(|c| {
                                    c.assert_block().statement(0, |r| {
                                        r.assert_return().value(|v| {
                                            v.identifier("CRIME_MURDER");
                                        });
                                    });
                                })
                                .no_alternative();
                        })
                        .statement(1, |s| {
                            s.assert_return();
                        });
                });
        })
        .declaration(2, |d| {
            d.assert_function()
                .name("B_GiveTradeInv")
                .parameter_count(2)
                .body(|b| {
                    b.statement_count(6)
                        .statement(0, |s| {
                            s.assert_variable().is_var().type_name("int").name("i");
                        })
                        .statement(3, |s| {
                            s.assert_if()
                                .condition(|c| {
                                    c.assert_parenthesized().assert_binary("&&");
                                })
                                .consequence(|c| {
                                    c.assert_block().statement(0, |a| {
                                        a.assert_assignment()
                                            .operator(AssignmentOperator::SubtractAssign);
                                    });
                                })
                                .alternative(|alt| {
                                    alt.assert_if()
                                        .condition(|c| {
                                            c.assert_parenthesized().assert_binary("==");
                                        })
                                        .consequence(|c| {
                                            c.assert_block().statement(0, |r| {
                                                r.assert_return().no_value();
                                            });
                                        })
                                        .alternative(|last| {
                                            last.assert_block().statement_count(1);
                                        });
                                });
                        });
                });
        })
        .declaration(3, |d| {
            d.assert_function().return_type("string").body(|b| {
                b.statement(0, |s| {
                    s.assert_return().value(|v| {
                        v.string("Ich");
                    });
                });
            });
        });
}

#[test]
fn test_classes_sample() {
    let result = Samples::Classes.parse();
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program)
        .declaration_count(3)
        .declaration(0, |d| {
            d.assert_variable().is_const().name("MAX_CHAPTER").value(|v| {
                v.number("6");
            });
        })
        .declaration(1, |d| {
            d.assert_class()
                .name("C_NPC")
                .member_count(8)
                .member(1, |m| {
                    m.assert_variable()
                        .type_name("string")
                        .name("name")
                        .size(|s| {
                            s.number("5");
                        });
                })
                .member(5, |m| {
                    m.assert_variable().name("attribute").size(|s| {
                        s.identifier("ATR_INDEX_MAX");
                    });
                });
        })
        .declaration(2, |d| {
            d.assert_class().name("C_Item").member_count(3);
        });
}

#[test]
fn test_variables_sample() {
    let result = Samples::Variables.parse();
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program)
        .declaration_count(11)
        .declaration(2, |d| {
            d.assert_variable().is_const().type_name("int").name("ATR_INDEX_MAX");
        })
        .declaration(3, |d| {
            d.assert_variable().type_name("float").value(|v| {
                v.number("1.5");
            });
        })
        .declaration(5, |d| {
            d.assert_variable().array().value(|v| {
                v.assert_initializer().element_count(3).element(0, |e| {
                    e.string("Nobody");
                });
            });
        })
        .declaration(8, |d| {
            d.assert_variable().is_var().type_name("C_NPC").name("hero").no_value();
        })
        .declaration(9, |d| {
            d.assert_variable().name("Zähler");
        })
        .declaration(10, |d| {
            d.assert_variable().value(|v| {
                v.boolean(true);
            });
        });
}

#[test]
fn test_class_member_assignment() {
    let result = parse("class C { x = 1; y += 2; };");
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program).declaration(0, |d| {
        d.assert_class()
            .member(0, |m| {
                m.assert_assignment().operator(AssignmentOperator::Assign);
            })
            .member(1, |m| {
                m.assert_assignment()
                    .operator(AssignmentOperator::AddAssign)
                    .left(|e| {
                        e.identifier("y");
                    });
            });
    });
}

#[test]
fn test_instance_without_parent() {
    let result = parse("instance Solo { };");
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program).declaration(0, |d| {
        d.assert_instance().name("Solo").no_parent().body(|b| {
            b.statement_count(0);
        });
    });
}

#[test]
fn test_semicolon_after_body_is_optional() {
    let result = parse("func void a() {}\nfunc void b() {};\ninstance C(D) {}");
    assert_diagnostics(&result.diagnostics).none();
    assert_program(&result.program).declaration_count(3);
}

#[test]
fn test_mixed_case_keywords() {
    let upper = parse("INSTANCE A(B) { X = TRUE; };");
    let capital = parse("Instance A(B) { X = True; };");
    assert_diagnostics(&upper.diagnostics).none();
    assert_diagnostics(&capital.diagnostics).none();
    assert_program(&upper.program).declaration(0, |d| {
        d.assert_instance().body(|b| {
            b.statement(0, |s| {
                s.assert_assignment().right(|e| {
                    e.boolean(true);
                });
            });
        });
    });
}
