//! Scenario template rendering
//!
//! Scenarios are rendered from a validated template rather than by raw
//! string concatenation. Build-time fields (`{{platform}}`, `{{channel}}`,
//! ...) are substituted when the template is constructed from config; the
//! single `{{value}}` field survives until render time and receives the
//! injected sample value. Construction rejects any template that does not
//! carry exactly one `{{value}}` field, or that still carries an
//! unsubstituted field.
//!
//! The `{{...}}` token syntax is deliberately distinct from Robot
//! Framework's own `${...}` variables, which pass through untouched.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{MatrixError, MatrixResult};
use crate::scenario::Scenario;

/// The one field substituted at render time
pub const VALUE_FIELD: &str = "value";

/// Robot Framework scenario skeleton for the ADC-to-GPIO rig.
///
/// One test case per file: create the machine, reset the output pins, feed
/// the sample, wait for the backend to report the read done, then assert
/// every output line against the expected bit.
const SCENARIO_SKELETON: &str = r#"*** Variables ***
${PLATFORM}          {{platform}}
${ELF}               {{elf}}
@{LED_PINS}          {{led_pins}}
${ADC_CHANNEL}       {{channel}}
${ADC_REPEAT}        {{repeat}}
${ADC_VALUE}         {{value}}
${TIMEOUT}           {{timeout}}
${POLL_INTERVAL}     {{poll_interval}}

*** Keywords ***
Create Machine
    Execute Command    mach create "{{machine_name}}"
    Execute Command    machine LoadPlatformDescription ${PLATFORM}
    Execute Command    sysbus LoadELF ${ELF}
    ${vector_table_offset}=    Execute Command    sysbus GetSymbolAddress "{{vector_table_symbol}}"
    Execute Command    sysbus.cpu VectorTableOffset ${vector_table_offset}

Feed Sample To ADC
    [Arguments]    ${value}    ${channel}    ${repeat}
    Execute Command    {{adc}} FeedSample ${value} ${channel} ${repeat}

Check If Read Is Done
    ${read_done}=    Execute Command    {{adc}} IsReadDone
    Return From Keyword If    ${read_done}    True
    Fail    ADC read not done yet

Wait Until Read Is Done
    Wait Until Keyword Succeeds    ${TIMEOUT}    ${POLL_INTERVAL}    Check If Read Is Done

Reset Pin
    [Arguments]    ${pin}
    Execute Command    {{gpio_port}} ResetPin ${pin}

Reset GPIO
    FOR    ${pin}    IN    @{LED_PINS}
        Reset Pin    ${pin}
    END

Read LED Value
    [Arguments]    ${pin}
    ${LED_VALUE}=    Execute Command    {{gpio_port}} ReadPin ${pin}
    RETURN    ${LED_VALUE}

Calc Expected LED Values
    [Arguments]    ${adc_value}
    ${led_values}=    Evaluate    [int(int(${adc_value} / {{scale}}) >> i) & 1 for i in range({{width}})]
    RETURN    ${led_values}

*** Test Cases ***
ADC Sample Drives LED Pins
    Create Machine
    Start Emulation
    Reset GPIO

    Feed Sample To ADC    ${ADC_VALUE}    ${ADC_CHANNEL}    ${ADC_REPEAT}
    ${expected_led_values}=    Calc Expected LED Values    ${ADC_VALUE}
    Wait Until Read Is Done

    FOR    ${index}    IN RANGE    0    {{width}}
        ${led_value}=    Read LED Value    ${LED_PINS}[${index}]
        Should Be Equal As Numbers    ${led_value}    ${expected_led_values}[${index}]
    END
"#;

/// A validated scenario template, ready to render per input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioTemplate {
    body: String,
}

impl ScenarioTemplate {
    /// Validate a template body.
    ///
    /// The body must carry exactly one `{{value}}` field and no other
    /// `{{...}}` field.
    pub fn new(body: String) -> MatrixResult<Self> {
        let mut value_count = 0;
        for name in fields_in(&body) {
            if name == VALUE_FIELD {
                value_count += 1;
            } else {
                return Err(MatrixError::UnresolvedField { name });
            }
        }
        if value_count != 1 {
            return Err(MatrixError::PlaceholderCount { count: value_count });
        }
        Ok(Self { body })
    }

    /// Build the default rig template from configuration
    pub fn from_config(config: &Config) -> MatrixResult<Self> {
        let led_pins = config
            .led_pins
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("    ");

        let body = substitute(
            SCENARIO_SKELETON,
            &[
                ("platform", config.platform.clone()),
                ("elf", config.elf.clone()),
                ("led_pins", led_pins),
                ("channel", config.channel.to_string()),
                ("repeat", config.repeat_count.to_string()),
                ("timeout", config.timeout.clone()),
                ("poll_interval", config.poll_interval.clone()),
                ("machine_name", config.machine_name.clone()),
                ("vector_table_symbol", config.vector_table_symbol.clone()),
                ("adc", config.adc.clone()),
                ("gpio_port", config.gpio_port.clone()),
                ("scale", config.scale.to_string()),
                ("width", config.output_width.to_string()),
            ],
        );
        Self::new(body)
    }

    /// Load and validate a custom template file
    pub fn from_file(path: &Path) -> MatrixResult<Self> {
        Self::new(fs::read_to_string(path)?)
    }

    /// Render the template for one scenario.
    ///
    /// Infallible: validation guaranteed exactly one `{{value}}` field.
    pub fn render(&self, scenario: &Scenario) -> String {
        self.body
            .replace("{{value}}", &scenario.identifier())
    }

    /// The validated template body
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Substitute named fields into a skeleton; unknown fields pass through
/// and are caught by `ScenarioTemplate::new`.
fn substitute(skeleton: &str, fields: &[(&str, String)]) -> String {
    let mut out = skeleton.to_string();
    for (name, value) in fields {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}

/// Names of every `{{...}}` field in `body`, in order of appearance
fn fields_in(body: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = body;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                names.push(after[..end].to_string());
                rest = &after[end + 2..];
            }
            None => break,
        }
    }
    names
}
