/// The cities a visitor can pick as their preferred project location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Caloocan,
    LasPinas,
    Makati,
    Malabon,
    Mandaluyong,
    Manila,
    Marikina,
    Muntinlupa,
    Navotas,
    Paranaque,
    Pasay,
    Pasig,
    QuezonCity,
    SanJuan,
    Taguig,
    Valenzuela,
    Baguio,
    Batangas,
}

impl Location {
    /// Every location, in the order the form lists them.
    pub const ALL: [Location; 18] = [
        Location::Caloocan,
        Location::LasPinas,
        Location::Makati,
        Location::Malabon,
        Location::Mandaluyong,
        Location::Manila,
        Location::Marikina,
        Location::Muntinlupa,
        Location::Navotas,
        Location::Paranaque,
        Location::Pasay,
        Location::Pasig,
        Location::QuezonCity,
        Location::SanJuan,
        Location::Taguig,
        Location::Valenzuela,
        Location::Baguio,
        Location::Batangas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Caloocan => "Caloocan",
            Location::LasPinas => "Las Piñas",
            Location::Makati => "Makati",
            Location::Malabon => "Malabon",
            Location::Mandaluyong => "Mandaluyong",
            Location::Manila => "Manila",
            Location::Marikina => "Marikina",
            Location::Muntinlupa => "Muntinlupa",
            Location::Navotas => "Navotas",
            Location::Paranaque => "Parañaque",
            Location::Pasay => "Pasay",
            Location::Pasig => "Pasig",
            Location::QuezonCity => "Quezon City",
            Location::SanJuan => "San Juan",
            Location::Taguig => "Taguig",
            Location::Valenzuela => "Valenzuela",
            Location::Baguio => "Baguio",
            Location::Batangas => "Batangas",
        }
    }

    pub fn parse(s: String) -> Result<Location, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Location is required".into());
        }
        Self::ALL
            .into_iter()
            .find(|location| location.as_str() == trimmed)
            .ok_or_else(|| "Please select a valid location".to_string())
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
