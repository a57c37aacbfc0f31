/// Indents every line of `fragment` but the first by `spaces` spaces.
///
/// The first line is left alone because nested fragments are embedded right
/// after text on the enclosing line. Empty lines stay empty.
pub fn indent(fragment: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    let mut ret = String::with_capacity(fragment.len());

    for (i, line) in fragment.split('\n').enumerate() {
        if i > 0 {
            ret.push('\n');

            if !line.is_empty() {
                ret.push_str(&pad);
            }
        }

        ret.push_str(line);
    }

    ret
}
