use std::fs;

use anyhow::Result;
use cldrdict::locales::locale_map;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn generates_one_dictionary_per_target_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;

    let status = test.command().status()?;
    assert!(status.success());

    for (target, _) in locale_map() {
        assert!(
            test.dict_path(target).is_file(),
            "missing dictionary for {}",
            target
        );
    }
    assert!(test.root().join("out/cldrLocaleDicts.zip").is_file());
    Ok(())
}

#[test]
fn derived_overrides_base_and_colons_are_stripped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;
    test.write_annotation_file(
        "annotations",
        "fr",
        r#"<annotation cp="😀" type="tts">face</annotation>"#,
    )?;
    test.write_annotation_file(
        "annotationsDerived",
        "fr",
        r#"<annotation cp="😀" type="tts">grinning:face</annotation>"#,
    )?;

    let status = test.command().status()?;
    assert!(status.success());

    assert_eq!(
        test.read_dict("fr")?,
        "\u{feff}symbols:\r\n😀\tgrinningface\t-\r\n"
    );
    Ok(())
}

#[test]
fn later_source_locale_overrides_earlier_one() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;
    // zh_tw merges zh then zh_Hant; zh_Hant must win for shared patterns.
    test.write_annotation_file(
        "annotationsDerived",
        "zh",
        r#"<annotation cp="🎉" type="tts">party zh</annotation>"#,
    )?;
    test.write_annotation_file(
        "annotationsDerived",
        "zh_Hant",
        r#"<annotation cp="🎉" type="tts">party zh_Hant</annotation>"#,
    )?;

    let status = test.command().status()?;
    assert!(status.success());

    let dict = test.read_dict("zh_tw")?;
    assert!(dict.contains("🎉\tparty zh_Hant\t-\r\n"));
    assert!(!dict.contains("party zh\t"));
    Ok(())
}

#[test]
fn default_locale_uses_level_none_others_inherit() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;

    let status = test.command().status()?;
    assert!(status.success());

    for line in test.read_dict("en")?.lines().skip(1) {
        assert!(line.ends_with("\tnone"), "unexpected en line: {:?}", line);
    }
    for line in test.read_dict("de")?.lines().skip(1) {
        assert!(line.ends_with("\t-"), "unexpected de line: {:?}", line);
    }
    Ok(())
}

#[test]
fn repeated_runs_produce_identical_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;

    assert!(test.command().status()?.success());
    let first_dict = fs::read(test.dict_path("en"))?;
    let first_zip = fs::read(test.root().join("out/cldrLocaleDicts.zip"))?;

    fs::remove_dir_all(test.root().join("out"))?;
    assert!(test.command().status()?.success());

    assert_eq!(first_dict, fs::read(test.dict_path("en"))?);
    assert_eq!(
        first_zip,
        fs::read(test.root().join("out/cldrLocaleDicts.zip"))?
    );
    Ok(())
}

#[test]
fn archive_contains_every_locale_dictionary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;

    assert!(test.command().status()?.success());

    let file = fs::File::open(test.root().join("out/cldrLocaleDicts.zip"))?;
    let mut archive = zip::ZipArchive::new(file)?;
    for (target, _) in locale_map() {
        let name = format!("{}/cldr.dic", target);
        assert!(
            archive.by_name(&name).is_ok(),
            "archive is missing {}",
            name
        );
    }
    Ok(())
}

#[test]
fn fails_when_cldr_checkout_is_missing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("CLDR submodule"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn fails_when_output_directory_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;
    fs::create_dir_all(test.root().join("out/locale"))?;

    let output = test.command().output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("not clean"), "stderr: {}", stderr);
    assert!(!test.root().join("out/cldrLocaleDicts.zip").exists());
    Ok(())
}

#[test]
fn fails_when_a_source_file_is_missing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;
    fs::remove_file(
        test.root()
            .join("cldr/production/common/annotationsDerived/af.xml"),
    )?;

    let output = test.command().output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("Missing CLDR annotation file"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("af.xml"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn fails_when_a_locale_has_no_tts_annotations() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;
    // Present but useless: no tts-typed annotations at all.
    test.write_annotation_file(
        "annotations",
        "am",
        r#"<annotation cp="😀">face | grin</annotation>"#,
    )?;
    test.write_annotation_file(
        "annotationsDerived",
        "am",
        r#"<annotation cp="😀">face | grin</annotation>"#,
    )?;

    let output = test.command().output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("locale am"), "stderr: {}", stderr);
    assert!(!test.dict_path("am").exists());
    Ok(())
}

#[test]
fn verbose_lists_resolved_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_full_cldr_fixture()?;

    let mut cmd = test.command();
    cmd.arg("--verbose");
    let output = cmd.output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("annotationsDerived"), "stdout: {}", stdout);
    Ok(())
}
