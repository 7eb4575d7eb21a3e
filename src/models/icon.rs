macro_rules! define_icons {
    ($(($variant:ident, $name:literal, $glyph_name:literal)),* $(,)?) => {
        /// Symbolic icon of a business model.
        ///
        /// Authored names that are not in the table resolve to [`Icon::DEFAULT`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Icon {
            $($variant,)*
        }

        impl Icon {
            pub const COUNT: usize = count_items!($($variant)*);

            #[must_use]
            pub fn parse(string: &str) -> Option<Self> {
                match string {
                    $($name => Some(Icon::$variant),)*
                    _ => None,
                }
            }

            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Icon::$variant => $name,)*
                }
            }

            #[must_use]
            pub const fn glyph_name(&self) -> &'static str {
                match self {
                    $(Icon::$variant => $glyph_name,)*
                }
            }

            #[must_use]
            pub const fn all() -> &'static [Self; Self::COUNT] {
                &[$(Icon::$variant,)*]
            }
        }

        impl std::fmt::Display for Icon {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{name}", name = self.name())
            }
        }

        impl std::str::FromStr for Icon {
            type Err = ();

            fn from_str(string: &str) -> Result<Self, Self::Err> {
                Self::parse(string).ok_or(())
            }
        }
    };
}

macro_rules! count_items {
    () => { 0 };
    ($head:tt $($tail:tt)*) => { 1 + count_items!($($tail)*) };
}

define_icons! {
    (Briefcase, "Briefcase", "applications-office-symbolic"),
    (ShoppingCart, "ShoppingCart", "shopping-cart-symbolic"),
    (Cloud, "Cloud", "weather-overcast-symbolic"),
    (Store, "Store", "system-software-install-symbolic"),
    (GraduationCap, "GraduationCap", "accessories-dictionary-symbolic"),
    (PlayCircle, "PlayCircle", "media-playback-start-symbolic"),
    (Users, "Users", "system-users-symbolic"),
    (Handshake, "Handshake", "emblem-shared-symbolic"),
    (Download, "Download", "folder-download-symbolic"),
    (Calendar, "Calendar", "x-office-calendar-symbolic"),
    (Heart, "Heart", "emblem-favorite-symbolic"),
    (Megaphone, "Megaphone", "audio-volume-high-symbolic"),
    (MessageCircle, "MessageCircle", "user-available-symbolic"),
    (Package, "Package", "package-x-generic-symbolic"),
    (Code, "Code", "utilities-terminal-symbolic"),
}

impl Icon {
    pub const DEFAULT: Self = Self::Briefcase;

    /// Maps an authored icon name to its variant, falling back to [`Icon::DEFAULT`].
    #[must_use]
    pub fn resolve(string: &str) -> Self {
        Self::parse(string).unwrap_or(Self::DEFAULT)
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::DEFAULT
    }
}
