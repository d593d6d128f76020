/// The standard-14 faces the statement is set in. They need no embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltinFont {
    #[default]
    Helvetica,
    HelveticaBold,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 2] = [BuiltinFont::Helvetica, BuiltinFont::HelveticaBold];

    pub fn postscript_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postscript_names_are_distinct() {
        assert_eq!(BuiltinFont::Helvetica.postscript_name(), "Helvetica");
        assert_eq!(BuiltinFont::HelveticaBold.postscript_name(), "Helvetica-Bold");
    }
}
