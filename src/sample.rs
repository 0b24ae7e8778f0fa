/// Demonstration program: Ryuk plans the death of L.
pub const SAMPLE: &str = r#"JUSTICIA
PAPAFRITA nombre "Ryuk"
LOCO "El shinigami aparece."
PAPAFRITA objetivo "L"
PAPAFRITA estrategia "Eliminar a L"

PLAN objetivo == "L"
VICTORIA
    LOCO "Plan en marcha para eliminar a " + objetivo
    PAPAFRITA nombreObjetivo "L"
    PAPAFRITA causa "Muerte por corazón"
    LOCO "Causando la muerte de " + nombreObjetivo + " por " + causa
    MANZANA
        LOCO "Comprobando resultados..."
        PAPAFRITA resultado "Muerte confirmada"
        LOCO resultado
    FIN
BORRAR objetivo
LOCO "El objetivo ha sido eliminado."
GANE"#;
