//! Settings layering through files and `ADDRESS_FIELD_*` variables.

use address_field::{AddressField, AddressFieldSettings, ValueEscaping};
use anyhow::Result;
use camino::Utf8Path;
use rstest::rstest;
use test_helpers::figment::{figment_error, with_jail};

#[rstest]
fn environment_selects_locale_and_escaping() -> Result<()> {
    let settings = with_jail(|j| {
        j.set_env("ADDRESS_FIELD_LOCALE", "ja");
        j.set_env("ADDRESS_FIELD_ESCAPE_API_VALUES", "false");
        AddressFieldSettings::load(None).map_err(|err| figment_error(&err))
    })?;
    assert_eq!(settings.locale, "ja");
    assert_eq!(settings.value_escaping(), ValueEscaping::Legacy);

    let plugin = AddressField::from_settings(settings)?;
    assert_eq!(plugin.info().category, "レイアウト");
    Ok(())
}

#[rstest]
fn file_supplies_asset_base_uri() -> Result<()> {
    let settings = with_jail(|j| {
        j.create_file(
            "address-field.toml",
            "base_uri = \"/wp-content/plugins/acf-address-field/\"\nversion = \"1.0.3\"\n",
        )?;
        AddressFieldSettings::load(Some(Utf8Path::new("address-field.toml")))
            .map_err(|err| figment_error(&err))
    })?;
    let plugin = AddressField::from_settings(settings)?;
    let assets = plugin.assets();
    assert_eq!(
        assets.style.src,
        "/wp-content/plugins/acf-address-field/address-field.css"
    );
    assert_eq!(assets.script.version, "1.0.3");
    Ok(())
}
