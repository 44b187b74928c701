//! XML form of the processing context

use super::series::XmlTs;
use super::XmlRender;
use crate::domain::{CalendarDefinition, Holiday, ProcessingContext, RequestsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XmlProcessingContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendars: Option<XmlCalendars>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<XmlVariables>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XmlCalendars {
    #[serde(rename = "calendar", default)]
    pub items: Vec<XmlCalendar>,
}

/// Exactly one of `national` / `chained` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlCalendar {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national: Option<XmlNationalCalendar>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chained: Option<XmlChainedCalendar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XmlNationalCalendar {
    #[serde(rename = "fixedDay", default)]
    pub fixed_days: Vec<XmlFixedDay>,

    #[serde(rename = "easterRelatedDay", default)]
    pub easter_related_days: Vec<XmlEasterRelatedDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlFixedDay {
    #[serde(rename = "@month")]
    pub month: u32,
    #[serde(rename = "@day")]
    pub day: u32,
    #[serde(rename = "@weight")]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlEasterRelatedDay {
    #[serde(rename = "@offset")]
    pub offset: i32,
    #[serde(rename = "@weight")]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlChainedCalendar {
    #[serde(rename = "@first")]
    pub first: String,
    #[serde(rename = "@second")]
    pub second: String,
    #[serde(rename = "@break")]
    pub break_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XmlVariables {
    #[serde(rename = "group", default)]
    pub groups: Vec<XmlVariableGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlVariableGroup {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "variable", default)]
    pub variables: Vec<XmlVariable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlVariable {
    #[serde(rename = "@name")]
    pub name: String,
    pub series: XmlTs,
}

impl XmlRender<ProcessingContext> for XmlProcessingContext {
    fn render(context: &ProcessingContext) -> Result<Self> {
        let calendars = if context.calendars.is_empty() {
            None
        } else {
            let items = context
                .calendars
                .iter()
                .map(|(name, calendar)| render_calendar(context, name, calendar))
                .collect::<Result<Vec<_>>>()?;
            Some(XmlCalendars { items })
        };

        let variables = if context.variables.is_empty() {
            None
        } else {
            let mut groups = Vec::with_capacity(context.variables.len());
            for (group, vars) in &context.variables {
                let variables = vars
                    .iter()
                    .map(|(name, ts)| {
                        Ok(XmlVariable {
                            name: name.clone(),
                            series: XmlTs::render(ts)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                groups.push(XmlVariableGroup {
                    name: group.clone(),
                    variables,
                });
            }
            Some(XmlVariables { groups })
        };

        Ok(Self {
            calendars,
            variables,
        })
    }
}

fn render_calendar(
    context: &ProcessingContext,
    name: &str,
    calendar: &CalendarDefinition,
) -> Result<XmlCalendar> {
    let what = format!("calendar '{name}'");
    let mut xcal = XmlCalendar {
        name: name.to_string(),
        national: None,
        chained: None,
    };

    match calendar {
        CalendarDefinition::National { holidays } => {
            let mut national = XmlNationalCalendar::default();
            for holiday in holidays {
                match *holiday {
                    Holiday::FixedDay { month, day, weight } => {
                        // 2000 is a leap year, so Feb 29 is accepted
                        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
                            return Err(RequestsError::rendering(
                                &what,
                                format!("invalid fixed day {day}/{month}"),
                            ));
                        }
                        check_weight(&what, weight)?;
                        national.fixed_days.push(XmlFixedDay { month, day, weight });
                    }
                    Holiday::EasterRelated { offset, weight } => {
                        check_weight(&what, weight)?;
                        national
                            .easter_related_days
                            .push(XmlEasterRelatedDay { offset, weight });
                    }
                }
            }
            xcal.national = Some(national);
        }
        CalendarDefinition::Chained {
            first,
            second,
            break_date,
        } => {
            for reference in [first, second] {
                if reference == name || context.calendar(reference).is_none() {
                    return Err(RequestsError::rendering(
                        &what,
                        format!("unknown chained calendar '{reference}'"),
                    ));
                }
            }
            xcal.chained = Some(XmlChainedCalendar {
                first: first.clone(),
                second: second.clone(),
                break_date: break_date.format("%Y-%m-%d").to_string(),
            });
        }
    }

    Ok(xcal)
}

fn check_weight(what: &str, weight: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&weight) {
        return Err(RequestsError::rendering(
            what,
            format!("holiday weight {weight} outside [0, 1]"),
        ));
    }
    Ok(())
}
