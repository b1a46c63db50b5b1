use crate::to_ascii_latin;

#[test]
fn test_latin_to_ascii() {
    assert_eq!(
        to_ascii_latin("Šefe, čiji je dođavola ovaj žuti džemper iz Ćuprije?"),
        "Sefe, ciji je dodjavola ovaj zuti dzemper iz Cuprije?"
    );
}

#[test]
fn test_mixed_encodings_to_ascii() {
    // Icelandic eth, ǉ ligature, ĳ ligature and combining carons.
    assert_eq!(
        to_ascii_latin("\u{D0}avo je u detaǉima, nĳe da ti C\u{30C}ika Dz\u{30C}os\u{30C} nije rekao."),
        "Djavo je u detaljima, nije da ti Cika Dzos nije rekao."
    );
}

#[test]
fn test_cyrillic_to_ascii() {
    assert_eq!(
        to_ascii_latin("Фијуче ветар у шибљу, леди пасаже и куће иза њих и гунђа у оџацима."),
        "Fijuce vetar u siblju, ledi pasaze i kuce iza njih i gundja u odzacima."
    );
}

#[test]
fn test_ascii_input_unchanged() {
    let ascii = "Plain ASCII text, 42 times!";
    assert_eq!(to_ascii_latin(ascii), ascii);
    assert_eq!(to_ascii_latin(""), "");
}

#[test]
fn test_stray_marks_dropped() {
    // A caron after an already accented letter has nothing left to attach to.
    assert_eq!(to_ascii_latin("ž\u{30C}"), "z");
    assert_eq!(to_ascii_latin("z\u{30C}\u{30C}"), "z");
    assert_eq!(to_ascii_latin("c\u{301}\u{301}a"), "ca");
    assert_eq!(to_ascii_latin("ǳ\u{30C}ep"), "dzep");

    for text in ["ž\u{30C}", "Ǳ\u{30C}\u{30C}", "\u{301}"] {
        let once = to_ascii_latin(text);
        assert_eq!(to_ascii_latin(&once), once);
    }
}
