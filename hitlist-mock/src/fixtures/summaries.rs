pub fn by_title(title: &str) -> Option<&'static str> {
    match title {
        "Golden" => Some(
            "\"Golden\" is a song performed by the fictional girl group Huntrix, voiced by EJAE, Audrey Nuna and Rei Ami, \
             from the soundtrack of the 2025 animated film KPop Demon Hunters. It was released on June 20, 2025, \
             through Republic Records.",
        ),
        "The Fate Of Ophelia" => Some(
            "\"The Fate of Ophelia\" is a song by the American singer-songwriter Taylor Swift from her twelfth studio album.",
        ),
        "Ordinary" => Some("\"Ordinary\" is a song by American singer Alex Warren."),
        "Mutt" => Some("\"Mutt\" is a song by American singer Leon Thomas."),
        "Daisies" => Some("\"Daisies\" is a song by Canadian singer Justin Bieber."),
        "Soda Pop" => Some("\"Soda Pop\" is a song performed by the fictional boy band Saja Boys."),
        "Manchild" => Some("\"Manchild\" is a song by American singer Sabrina Carpenter."),
        "TIMEOUT" => Some("\"TIMEOUT\" is a placeholder song used to exercise slow lookups."),
        "Love Me Not" => Some("\"Love Me Not\" is a song by American singer Ravyn Lenae."),
        "Just In Case" => Some("\"Just in Case\" is a song by American country singer Morgan Wallen."),
        _ => None,
    }
}
