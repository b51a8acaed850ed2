use std::collections::HashMap;
use std::sync::OnceLock;

static FLAGS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

const COUNTRY_FLAGS: &[(&str, &str)] = &[
    ("Algeria", "🇩🇿"),
    ("Angola", "🇦🇴"),
    ("Argentina", "🇦🇷"),
    ("Australia", "🇦🇺"),
    ("Austria", "🇦🇹"),
    ("Bangladesh", "🇧🇩"),
    ("Belgium", "🇧🇪"),
    ("Benin", "🇧🇯"),
    ("Botswana", "🇧🇼"),
    ("Brazil", "🇧🇷"),
    ("Burkina Faso", "🇧🇫"),
    ("Cameroon", "🇨🇲"),
    ("Canada", "🇨🇦"),
    ("Chile", "🇨🇱"),
    ("China", "🇨🇳"),
    ("Colombia", "🇨🇴"),
    ("Côte d'Ivoire", "🇨🇮"),
    ("Denmark", "🇩🇰"),
    ("Egypt", "🇪🇬"),
    ("Estonia", "🇪🇪"),
    ("Ethiopia", "🇪🇹"),
    ("Finland", "🇫🇮"),
    ("France", "🇫🇷"),
    ("Germany", "🇩🇪"),
    ("Ghana", "🇬🇭"),
    ("Greece", "🇬🇷"),
    ("India", "🇮🇳"),
    ("Indonesia", "🇮🇩"),
    ("Ireland", "🇮🇪"),
    ("Israel", "🇮🇱"),
    ("Italy", "🇮🇹"),
    ("Japan", "🇯🇵"),
    ("Kenya", "🇰🇪"),
    ("Malaysia", "🇲🇾"),
    ("Mexico", "🇲🇽"),
    ("Morocco", "🇲🇦"),
    ("Mozambique", "🇲🇿"),
    ("Namibia", "🇳🇦"),
    ("Netherlands", "🇳🇱"),
    ("New Zealand", "🇳🇿"),
    ("Nigeria", "🇳🇬"),
    ("Norway", "🇳🇴"),
    ("Pakistan", "🇵🇰"),
    ("Peru", "🇵🇪"),
    ("Philippines", "🇵🇭"),
    ("Poland", "🇵🇱"),
    ("Portugal", "🇵🇹"),
    ("Qatar", "🇶🇦"),
    ("Rwanda", "🇷🇼"),
    ("Saudi Arabia", "🇸🇦"),
    ("Senegal", "🇸🇳"),
    ("Singapore", "🇸🇬"),
    ("South Africa", "🇿🇦"),
    ("South Korea", "🇰🇷"),
    ("Spain", "🇪🇸"),
    ("Sweden", "🇸🇪"),
    ("Switzerland", "🇨🇭"),
    ("Tanzania", "🇹🇿"),
    ("Tunisia", "🇹🇳"),
    ("Turkey", "🇹🇷"),
    ("Uganda", "🇺🇬"),
    ("Ukraine", "🇺🇦"),
    ("United Arab Emirates", "🇦🇪"),
    ("United Kingdom", "🇬🇧"),
    ("United States", "🇺🇸"),
    ("Vietnam", "🇻🇳"),
    ("Zambia", "🇿🇲"),
    ("Zimbabwe", "🇿🇼"),
];

/// Flag emoji for a country name as users type it on their profile.
pub fn flag_for(country: &str) -> Option<&'static str> {
    FLAGS
        .get_or_init(|| COUNTRY_FLAGS.iter().copied().collect())
        .get(country.trim())
        .copied()
}
