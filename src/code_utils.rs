use egui_code_editor::Syntax;

/// Resaltado para los ejemplos de Aura. Las llaves de `{while}`, `{/fun}`... son
/// puntuación para el editor, así que basta con las palabras.
pub fn aura_syntax() -> Syntax {
    Syntax::new("aura")
        .with_comment("//")
        .with_keywords([
            "module", "fun", "class", "while", "for", "if", "else", "return", "break", "in",
            "out", "true", "false",
        ])
        .with_types(["int", "float", "char", "string", "bool"])
}

/// Número de filas que ocupa un bloque de código al mostrarse completo.
pub fn code_rows(code: &str) -> usize {
    code.lines().count().max(1)
}
