use std::fmt::Display;

macro_rules! keywords {
    ($($variant:ident => $word:literal),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Every keyword, in the order the classifier tries them.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $word,)*
                }
            }
        }
    };
}

keywords! {
    Justicia => "JUSTICIA",
    Papafrita => "PAPAFRITA",
    Plan => "PLAN",
    Victoria => "VICTORIA",
    Manzana => "MANZANA",
    Borrar => "BORRAR",
    Loco => "LOCO",
    Gane => "GANE",
    Fin => "FIN",
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
