// src/markup.rs
//
// Las respuestas de AuraBot y los textos del tutorial usan un marcado ligero:
// bloques ```lang ... ```, `código`, **negrita** y un salto de línea por cada `\n`.
// Aquí se normaliza a CommonMark para pintarlo con `egui_commonmark`.

const FENCE: &str = "```";
const HARD_BREAK: &str = "  ";

/// Convierte el marcado ligero en CommonMark equivalente:
/// - cada `\n` fuera de un bloque de código es un salto de línea real;
/// - `**` sólo abre negrita si se cierra en la misma línea;
/// - el contenido de los bloques ``` se copia tal cual.
pub fn to_commonmark(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut in_fence = false;
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        let is_fence = line.trim_start().starts_with(FENCE);

        if in_fence || is_fence {
            out.push_str(line);
        } else {
            out.push_str(&escape_unpaired_bold(line));
            let next_is_fence = lines
                .peek()
                .is_some_and(|next| next.trim_start().starts_with(FENCE));
            if !line.trim().is_empty() && lines.peek().is_some() && !next_is_fence {
                out.push_str(HARD_BREAK);
            }
        }

        if is_fence {
            in_fence = !in_fence;
        }
        if lines.peek().is_some() {
            out.push('\n');
        }
    }

    out
}

/// Escapa el último `**` de la línea cuando queda sin pareja. Los `**` dentro
/// de `código` no cuentan.
fn escape_unpaired_bold(line: &str) -> String {
    let mut markers = Vec::new();
    let mut in_code = false;
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'`' => {
                in_code = !in_code;
                i += 1;
            }
            b'*' if !in_code && bytes.get(i + 1) == Some(&b'*') => {
                markers.push(i);
                i += 2;
            }
            _ => i += 1,
        }
    }

    match markers.last() {
        Some(&last) if markers.len() % 2 == 1 => {
            format!("{}\\*\\*{}", &line[..last], &line[last + 2..])
        }
        _ => line.to_owned(),
    }
}
