//! Approximate fallback coordinates for when geocoding is unavailable.
//!
//! Covers the Phoenix metro cities the facilities sheet draws from. ZIP
//! codes take precedence over the free-text city column since the sheet's
//! city spellings vary; unknown city/ZIP pairs land on the Phoenix
//! baseline. A small deterministic offset derived from the input lengths
//! keeps facilities that share a fallback city from rendering as exactly
//! overlapping map markers. The offset is not collision-free; it only
//! reduces visual overlap for small result sets.

/// Baseline coordinate when neither the city nor the ZIP is known
/// (downtown Phoenix).
pub const DEFAULT_COORDINATES: (f64, f64) = (33.4484, -112.0740);

/// Computes deterministic approximate coordinates for a city/ZIP pair.
///
/// Resolution order: ZIP → canonical city if the ZIP is known, else the
/// city string as given, else [`DEFAULT_COORDINATES`]. Identical
/// `(city, zip)` pairs always produce identical output.
#[must_use]
pub fn fallback_coordinates(city: &str, zip: &str) -> (f64, f64) {
    let canonical = city_for_zip(zip).unwrap_or(city);
    let (lat, lng) = city_coordinates(canonical).unwrap_or(DEFAULT_COORDINATES);

    // Low-amplitude perturbation so co-located fallbacks don't stack.
    let hash = city.len() + zip.len();
    let lat_offset = ((hash % 100) as f64 / 1000.0) * 0.02;
    let lng_offset = (((hash >> 4) % 100) as f64 / 1000.0) * 0.02;

    (lat + lat_offset, lng + lng_offset)
}

/// Base coordinates for the known Phoenix metro cities.
fn city_coordinates(city: &str) -> Option<(f64, f64)> {
    match city {
        "Phoenix" => Some((33.4484, -112.0740)),
        "Scottsdale" => Some((33.4942, -111.9261)),
        "Mesa" => Some((33.4152, -111.8315)),
        "Tempe" => Some((33.4255, -111.9400)),
        "Chandler" => Some((33.3062, -111.8413)),
        "Gilbert" => Some((33.3528, -111.7890)),
        "Glendale" => Some((33.5387, -112.1860)),
        "Peoria" => Some((33.5806, -112.2374)),
        "Surprise" => Some((33.6292, -112.3679)),
        "Avondale" => Some((33.4356, -112.3496)),
        "Goodyear" => Some((33.4355, -112.3576)),
        "Buckeye" => Some((33.3703, -112.5838)),
        _ => None,
    }
}

/// Maps known metro-area ZIP codes to their canonical city.
fn city_for_zip(zip: &str) -> Option<&'static str> {
    match zip {
        "85233" | "85234" | "85295" | "85296" | "85297" | "85298" => Some("Gilbert"),
        "85001" | "85002" | "85003" | "85004" | "85006" | "85007" | "85008" | "85009"
        | "85012" | "85013" | "85014" | "85015" | "85016" | "85017" | "85018" | "85019"
        | "85020" | "85021" | "85022" | "85023" | "85024" | "85027" | "85028" | "85029"
        | "85032" | "85033" | "85034" | "85035" | "85037" | "85040" | "85041" | "85042"
        | "85043" | "85044" | "85045" | "85048" | "85051" | "85053" | "85054" | "85083" => {
            Some("Phoenix")
        }
        "85250" | "85251" | "85252" | "85253" | "85254" | "85255" | "85256" | "85257"
        | "85258" | "85259" | "85260" | "85261" | "85262" | "85266" | "85267" | "85268" => {
            Some("Scottsdale")
        }
        "85201" | "85202" | "85203" | "85204" | "85205" | "85206" | "85207" | "85208"
        | "85209" | "85210" | "85211" | "85212" | "85213" | "85214" | "85215" | "85216" => {
            Some("Mesa")
        }
        "85281" | "85282" | "85283" | "85284" | "85285" => Some("Tempe"),
        "85224" | "85225" | "85226" | "85248" | "85249" => Some("Chandler"),
        "85301" | "85302" | "85303" | "85304" | "85305" | "85306" | "85307" | "85308"
        | "85309" => Some("Glendale"),
        "85345" | "85381" | "85382" | "85383" | "85385" => Some("Peoria"),
        "85374" | "85378" | "85387" | "85388" => Some("Surprise"),
        "85323" | "85392" | "85393" => Some("Avondale"),
        "85338" | "85395" => Some("Goodyear"),
        "85326" | "85396" => Some("Buckeye"),
        _ => None,
    }
}
