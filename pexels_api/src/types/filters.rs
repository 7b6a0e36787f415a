//! Enumerated filter values accepted by the search and collection endpoints.
//!
//! Each enum renders to the literal the API expects and parses back from it,
//! so free text from callers is validated before it reaches a request.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All values, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The literal sent to the API.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(Error::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Search locale.
    Locale, "locale" {
        EnUs => "en-US",
        PtBr => "pt-BR",
        EsEs => "es-ES",
        CaEs => "ca-ES",
        DeDe => "de-DE",
        ItIt => "it-IT",
        FrFr => "fr-FR",
        SvSe => "sv-SE",
        IdId => "id-ID",
        PlPl => "pl-PL",
        JaJp => "ja-JP",
        ZhTw => "zh-TW",
        ZhCn => "zh-CN",
        KoKr => "ko-KR",
        ThTh => "th-TH",
        NlNl => "nl-NL",
        HuHu => "hu-HU",
        ViVn => "vi-VN",
        CsCz => "cs-CZ",
        DaDk => "da-DK",
        FiFi => "fi-FI",
        UkUa => "uk-UA",
        ElGr => "el-GR",
        RoRo => "ro-RO",
        NbNo => "nb-NO",
        SkSk => "sk-SK",
        TrTr => "tr-TR",
        RuRu => "ru-RU",
    }
}

wire_enum! {
    /// Desired media orientation.
    Orientation, "orientation" {
        Landscape => "landscape",
        Portrait => "portrait",
        Square => "square",
    }
}

wire_enum! {
    /// Minimum media size.
    Size, "size" {
        /// 24MP for photos, 4K for videos.
        Large => "large",
        /// 12MP for photos, Full HD for videos.
        Medium => "medium",
        /// 4MP for photos, HD for videos.
        Small => "small",
    }
}

wire_enum! {
    /// Dominant photo colour.
    Color, "color" {
        Red => "red",
        Orange => "orange",
        Yellow => "yellow",
        Green => "green",
        Turquoise => "turquoise",
        Blue => "blue",
        Violet => "violet",
        Pink => "pink",
        Brown => "brown",
        Black => "black",
        Gray => "gray",
        White => "white",
    }
}

wire_enum! {
    /// Restricts a collection listing to one kind of media.
    MediaFilter, "media type" {
        Photos => "photos",
        Videos => "videos",
    }
}
