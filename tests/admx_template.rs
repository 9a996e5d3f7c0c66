//! Integration tests for the ADMX writer realization.

use pretty_assertions::assert_eq;

use policy_templater::model::{EnumItemDef, GroupDef, PolicyDef, PolicyNode, PolicyType};
use policy_templater::{
    generate_template_text, AdmxConfig, AdmxWriter, GenerateError, MessageCatalog, PlatformFilter,
    WriterError,
};

fn generate(definitions: &[PolicyNode], platforms: &PlatformFilter) -> String {
    let messages = MessageCatalog::new();
    let mut writer = AdmxWriter::new(AdmxConfig::default());
    generate_template_text(&messages, definitions, &mut writer, platforms)
        .expect("generation should succeed")
}

#[test]
fn full_document_for_small_definition_set() {
    let definitions = vec![
        PolicyNode::Policy(
            PolicyDef::new("CloudReportingEnabled", PolicyType::Main)
                .with_supported_on(["chrome.win:8-"]),
        ),
        PolicyNode::Group(GroupDef::new(
            "Network",
            vec![PolicyDef::new("ProxyServer", PolicyType::String)
                .with_supported_on(["chrome.win:8-"])],
        )),
    ];

    let text = generate(&definitions, &PlatformFilter::only(["win"]));

    let expected = r#"<?xml version="1.0" ?>
<policyDefinitions revision="1.0" schemaVersion="1.0">
  <policyNamespaces>
    <target prefix="browser" namespace="Policies.Browser"/>
    <using prefix="windows" namespace="Microsoft.Policies.Windows"/>
  </policyNamespaces>
  <resources minRequiredRevision="1.0"/>
  <supportedOn>
    <definitions>
      <definition name="SUPPORTED_WIN7" displayName="$(string.SUPPORTED_WIN7)"/>
    </definitions>
  </supportedOn>
  <categories>
    <category name="browser" displayName="$(string.browser)"/>
    <category name="Network" displayName="$(string.Network_group)">
      <parentCategory ref="browser"/>
    </category>
  </categories>
  <policies>
    <policy name="CloudReportingEnabled" class="Both" displayName="$(string.CloudReportingEnabled)" explainText="$(string.CloudReportingEnabled_Explain)" presentation="$(presentation.CloudReportingEnabled)" key="Software\Policies\Browser" valueName="CloudReportingEnabled">
      <parentCategory ref="browser"/>
      <supportedOn ref="SUPPORTED_WIN7"/>
      <enabledValue>
        <decimal value="1"/>
      </enabledValue>
      <disabledValue>
        <decimal value="0"/>
      </disabledValue>
    </policy>
    <policy name="ProxyServer" class="Both" displayName="$(string.ProxyServer)" explainText="$(string.ProxyServer_Explain)" presentation="$(presentation.ProxyServer)" key="Software\Policies\Browser">
      <parentCategory ref="Network"/>
      <supportedOn ref="SUPPORTED_WIN7"/>
      <elements>
        <text id="ProxyServer" valueName="ProxyServer"/>
      </elements>
    </policy>
  </policies>
</policyDefinitions>
"#;
    assert_eq!(text, expected);
}

#[test]
fn empty_input_produces_scaffold_only() {
    let text = generate(&[], &PlatformFilter::All);

    assert!(text.starts_with("<?xml version=\"1.0\" ?>"));
    assert!(text.contains("<policyDefinitions revision=\"1.0\" schemaVersion=\"1.0\">"));
    assert!(text.contains("<policies/>"));
    assert!(!text.contains("<policy "));
}

#[test]
fn int_enum_policy_uses_decimal_values() {
    let definitions = vec![PolicyNode::Policy(
        PolicyDef::new("ProxyMode", PolicyType::IntEnum).with_items([
            EnumItemDef::new("direct", 0),
            EnumItemDef::new("fixed", 1),
        ]),
    )];

    let text = generate(&definitions, &PlatformFilter::All);

    assert!(text.contains("<enum id=\"ProxyMode\" valueName=\"ProxyMode\">"));
    assert!(text.contains("<item displayName=\"$(string.direct)\">"));
    assert!(text.contains("<decimal value=\"0\"/>"));
    assert!(text.contains("<decimal value=\"1\"/>"));
}

#[test]
fn string_enum_policy_uses_string_values() {
    let definitions = vec![PolicyNode::Policy(
        PolicyDef::new("SearchProvider", PolicyType::StringEnum).with_items([
            EnumItemDef::new("first", "one"),
            EnumItemDef::new("second", "two"),
        ]),
    )];

    let text = generate(&definitions, &PlatformFilter::All);

    assert!(text.contains("<string value=\"one\"/>"));
    assert!(text.contains("<string value=\"two\"/>"));
    assert!(!text.contains("<decimal"));
}

#[test]
fn list_policy_appends_name_to_registry_key() {
    let definitions = vec![PolicyNode::Policy(PolicyDef::new(
        "DisabledPlugins",
        PolicyType::List,
    ))];

    let text = generate(&definitions, &PlatformFilter::All);

    assert!(text.contains(
        "<list id=\"DisabledPluginsDesc\" valuePrefix=\"\" key=\"Software\\Policies\\Browser\\DisabledPlugins\"/>"
    ));
}

#[test]
fn int_policy_is_rejected() {
    let messages = MessageCatalog::new();
    let definitions = vec![PolicyNode::Policy(PolicyDef::new(
        "MaxConnections",
        PolicyType::Int,
    ))];
    let mut writer = AdmxWriter::new(AdmxConfig::default());

    let result =
        generate_template_text(&messages, &definitions, &mut writer, &PlatformFilter::All);

    assert!(matches!(
        result,
        Err(GenerateError::Writer(WriterError::UnsupportedPolicyType {
            ..
        }))
    ));
}

#[test]
fn grouped_policy_refers_to_its_category() {
    let definitions = vec![PolicyNode::Group(GroupDef::new(
        "Homepage",
        vec![PolicyDef::new("HomepageLocation", PolicyType::String)],
    ))];

    let text = generate(&definitions, &PlatformFilter::All);

    assert!(text.contains("<category name=\"Homepage\" displayName=\"$(string.Homepage_group)\">"));
    assert!(text.contains("<parentCategory ref=\"Homepage\"/>"));
}

#[test]
fn output_is_deterministic() {
    let definitions = vec![
        PolicyNode::Group(GroupDef::new(
            "Homepage",
            vec![
                PolicyDef::new("HomepageIsNewTabPage", PolicyType::Main),
                PolicyDef::new("HomepageLocation", PolicyType::String),
            ],
        )),
        PolicyNode::Policy(PolicyDef::new("DisabledPlugins", PolicyType::List)),
    ];

    let first = generate(&definitions, &PlatformFilter::All);
    let second = generate(&definitions, &PlatformFilter::All);
    assert_eq!(first, second);
}

#[test]
fn custom_config_shapes_namespaces_and_categories() {
    let config = AdmxConfig::from_str(
        r#"
        admx_prefix = "acme"
        admx_namespace = "Policies.Acme"
        win_reg_key_name = 'Software\Policies\Acme'
        win_category_path = ["acme", "acmebrowser"]
        "#,
    )
    .expect("config should parse");

    let messages = MessageCatalog::new();
    let definitions = vec![PolicyNode::Policy(PolicyDef::new(
        "HomepageLocation",
        PolicyType::String,
    ))];
    let mut writer = AdmxWriter::new(config);
    let text = generate_template_text(&messages, &definitions, &mut writer, &PlatformFilter::All)
        .expect("generation should succeed");

    assert!(text.contains("<target prefix=\"acme\" namespace=\"Policies.Acme\"/>"));
    assert!(text.contains("<category name=\"acmebrowser\" displayName=\"$(string.acmebrowser)\">"));
    // Ungrouped policies attach to the last category of the path
    assert!(text.contains("<parentCategory ref=\"acmebrowser\"/>"));
    assert!(text.contains("key=\"Software\\Policies\\Acme\""));
}
