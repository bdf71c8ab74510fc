use std::fs;

use compendium_content::{
    CompendiumAssembler, ConfigLoader, FileDocumentSource, parse_document, render_document,
};
use compendium_core::{Category, CharacterClass, Codec, Race};

const RACES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<compendium version="5">
    <race>
        <name>Halfling</name>
        <size>S</size>
        <speed>25</speed>
        <ability>Dex 2</ability>
        <proficiency></proficiency>
        <trait>
            <name>Lucky</name>
            <text>Reroll natural 1s.</text>
        </trait>
    </race>
    <subrace base="Halfling">
        <name>Stout</name>
        <ability>Con 1</ability>
        <trait>
            <name>Stout Resilience</name>
            <text>Advantage against poison.</text>
        </trait>
    </subrace>
</compendium>
"#;

const CLASSES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<compendium version="5">
    <class>
        <name>Bard</name>
        <hd>8</hd>
        <proficiency>Dexterity, Charisma</proficiency>
        <spellAbility>Charisma</spellAbility>
        <autolevel level="0">
            <feature><name>Starting Bard</name></feature>
        </autolevel>
        <autolevel level="2">
            <feature><name>Jack of All Trades</name><text>Add half.</text></feature>
        </autolevel>
        <autolevel level="1">
            <slots>2,2,0,0,0,0,0,0,0,0</slots>
        </autolevel>
        <autolevel level="1">
            <feature><name>Bardic Inspiration</name><text>Inspire others.</text></feature>
        </autolevel>
        <autolevel level="2">
            <slots>2,3,0,0,0,0,0,0,0,0</slots>
        </autolevel>
    </class>
</compendium>
"#;

#[test]
fn converts_configured_documents_into_one_compendium() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Character")).unwrap();
    fs::write(dir.path().join("Races.xml"), RACES).unwrap();
    fs::write(dir.path().join("Character/Classes.xml"), CLASSES).unwrap();
    fs::write(
        dir.path().join("compendium.toml"),
        r#"
        [sources]
        races = "Races.xml"
        classes = "Character/Classes.xml"
        spells = "Spells/Missing.xml"
        "#,
    )
    .unwrap();

    let mut config = ConfigLoader::load(&dir.path().join("compendium.toml")).unwrap();
    config.categories.retain(|&c| c != Category::Spells);
    let source = FileDocumentSource::new(config.sources.clone());

    let root = CompendiumAssembler::new(&source)
        .with_categories(config.categories.iter().copied())
        .assemble()
        .unwrap();
    let rendered = render_document(&root).unwrap();
    assert!(rendered.starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<compendium version=\"5\">"
    ));

    let reparsed = parse_document(&rendered).unwrap();
    let names: Vec<_> = reparsed.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["class", "race", "race"]);

    let bard = CharacterClass::decode(reparsed.child("class").unwrap()).unwrap();
    let levels: Vec<_> = bard.levels.iter().map(|l| l.level).collect();
    assert_eq!(levels, vec![1, 2]);
    assert_eq!(bard.levels[0].slots.counts[..2], [2, 2]);
    assert_eq!(bard.levels[1].slots.counts[..2], [2, 3]);
    assert_eq!(bard.levels[0].features[0].name, "Bardic Inspiration");
    assert_eq!(bard.levels[1].features[0].name, "Jack of All Trades");

    // Slot fragments for both levels precede both feature fragments.
    let fragments: Vec<_> = reparsed
        .child("class")
        .unwrap()
        .children_named("autolevel")
        .map(|a| (a.attr("level").unwrap_or(""), a.child("slots").is_some()))
        .collect();
    assert_eq!(
        fragments,
        vec![("1", true), ("2", true), ("1", false), ("2", false)]
    );

    let races = Race::decode_all(&reparsed).unwrap();
    let stout = &races[1];
    assert_eq!(stout.name, "Stout");
    assert_eq!(stout.size, "S");
    assert_eq!(stout.speed, 25);
    assert_eq!(stout.abilities.format(), "Dex 2, Con 1");
    let traits: Vec<_> = stout.traits.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(traits, vec!["Lucky", "Stout Resilience"]);
}

#[test]
fn unreadable_source_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("compendium.toml"),
        "categories = [\"feats\"]\n[sources]\nfeats = \"Feats.xml\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(&dir.path().join("compendium.toml")).unwrap();
    let source = FileDocumentSource::new(config.sources);

    let err = CompendiumAssembler::new(&source)
        .with_categories(config.categories)
        .assemble()
        .unwrap_err();
    assert!(err.to_string().contains("feats"));
}
