//! Shared plaintexts for tests

/// A French plaintext of a bit more than 600 letters.
pub const LONG_FRENCH_TEXT: &str = "Il etait une fois, dans un petit village au bord de la mer, un vieux pecheur qui vivait \
    seul avec son chien. Chaque matin, il partait avant le lever du soleil et revenait le soir \
    avec des poissons pour tout le village. Les enfants venaient le voir sur le port et il \
    leur racontait des histoires de tempetes, de baleines et de pays lointains. Un jour, une \
    grande tempete arriva sur la cote et le vieux pecheur ne revint pas. Les habitants du \
    village le chercherent pendant trois jours sur la plage et dans les rochers. Le quatrieme \
    jour, son chien se mit a aboyer devant la mer et tout le monde vit une petite barque qui \
    approchait lentement du port. Le vieux pecheur etait vivant, fatigue mais heureux, et il \
    avait dans sa barque le plus grand poisson que le village avait jamais vu.";
