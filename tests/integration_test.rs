use kirascript::{build_catalog, run, sample::SAMPLE, SymbolEntry};

fn test_trace(source: &str, expected_output: &str) {
    let trace = run(source);
    assert_eq!(trace.join("\n"), expected_output);
    assert_eq!(run(source), trace, "run should be idempotent");
}

#[test]
fn test_stops_at_gane() {
    let source = "JUSTICIA\nLOCO hola\nGANE\nLOCO nunca";
    let expected_output = "Iniciando el programa...\nMensaje: hola\nTerminando el programa.";
    test_trace(source, expected_output);
}

#[test]
fn test_unrecognized_lines_are_dropped() {
    let source = r#"
    JUSTICIA
    XYZ desconocido
    // not a comment either
    PAPAFRITA x 5
    "#;
    let expected_output = "Iniciando el programa...\nDeclarando variable: x 5";
    test_trace(source, expected_output);
}

#[test]
fn test_sample_trace() {
    let expected_output = r#"Iniciando el programa...
Declarando variable: nombre "Ryuk"
Mensaje: "El shinigami aparece."
Declarando variable: objetivo "L"
Declarando variable: estrategia "Eliminar a L"
Evaluando condición: objetivo == "L"
Condición cumplida, ejecutando bloque de victoria.
Mensaje: "Plan en marcha para eliminar a " + objetivo
Declarando variable: nombreObjetivo "L"
Declarando variable: causa "Muerte por corazón"
Mensaje: "Causando la muerte de " + nombreObjetivo + " por " + causa
Iniciando bucle para comprobaciones.
Mensaje: "Comprobando resultados..."
Declarando variable: resultado "Muerte confirmada"
Mensaje: resultado
Borrando variable: objetivo
Mensaje: "El objetivo ha sido eliminado."
Terminando el programa."#;
    test_trace(SAMPLE, expected_output);
}

#[test]
fn test_sample_variables() {
    let execution = kirascript::execute(SAMPLE);
    assert_eq!(execution.lines_processed, 20);
    assert_eq!(
        execution.variables.sorted(),
        vec![
            ("nombre", 2),
            ("estrategia", 5),
            ("nombreObjetivo", 10),
            ("causa", 11),
            ("resultado", 15),
        ]
    );
}

#[test]
fn test_sample_catalog() {
    let catalog = build_catalog(SAMPLE);
    assert_eq!(catalog.len(), 14);
    assert_eq!(
        &catalog[10..],
        &[
            SymbolEntry::new(
                "PAPAFRITA",
                "Asignación de variable -> PAPAFRITA nombre \"Ryuk\""
            ),
            SymbolEntry::new(
                "PAPAFRITA",
                "Asignación de variable -> PAPAFRITA objetivo \"L\""
            ),
            SymbolEntry::new(
                "PAPAFRITA",
                "Asignación de variable -> PAPAFRITA estrategia \"Eliminar a L\""
            ),
            SymbolEntry::new("PLAN", "Condicional IF -> PLAN objetivo == \"L\""),
        ]
    );
}

#[test]
fn test_trace_never_exceeds_recognized_lines() {
    let source = "JUSTICIA\nFIN\n\nLOCO a\nBASURA\nGANE\nLOCO b";
    let trace = run(source);
    let non_empty = source.lines().filter(|l| !l.trim().is_empty()).count();
    assert!(trace.len() <= non_empty);
    assert_eq!(trace.len(), 3);
}
