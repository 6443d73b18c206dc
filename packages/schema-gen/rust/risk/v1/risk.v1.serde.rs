// @generated
impl serde::Serialize for AcknowledgeAlertRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.alert_id.is_empty() {
            len += 1;
        }
        if !self.acknowledged_by.is_empty() {
            len += 1;
        }
        if !self.note.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.AcknowledgeAlertRequest", len)?;
        if !self.alert_id.is_empty() {
            struct_ser.serialize_field("alertId", &self.alert_id)?;
        }
        if !self.acknowledged_by.is_empty() {
            struct_ser.serialize_field("acknowledgedBy", &self.acknowledged_by)?;
        }
        if !self.note.is_empty() {
            struct_ser.serialize_field("note", &self.note)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for AcknowledgeAlertRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "alert_id",
            "alertId",
            "acknowledged_by",
            "acknowledgedBy",
            "note",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            AlertId,
            AcknowledgedBy,
            Note,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "alertId" | "alert_id" => Ok(GeneratedField::AlertId),
                            "acknowledgedBy" | "acknowledged_by" => Ok(GeneratedField::AcknowledgedBy),
                            "note" => Ok(GeneratedField::Note),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = AcknowledgeAlertRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.AcknowledgeAlertRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<AcknowledgeAlertRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut alert_id__ = None;
                let mut acknowledged_by__ = None;
                let mut note__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::AlertId => {
                            if alert_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("alertId"));
                            }
                            alert_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AcknowledgedBy => {
                            if acknowledged_by__.is_some() {
                                return Err(serde::de::Error::duplicate_field("acknowledgedBy"));
                            }
                            acknowledged_by__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Note => {
                            if note__.is_some() {
                                return Err(serde::de::Error::duplicate_field("note"));
                            }
                            note__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(AcknowledgeAlertRequest {
                    alert_id: alert_id__.unwrap_or_default(),
                    acknowledged_by: acknowledged_by__.unwrap_or_default(),
                    note: note__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.AcknowledgeAlertRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for AcknowledgeAlertResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.alert.is_some() {
            len += 1;
        }
        if self.success {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.AcknowledgeAlertResponse", len)?;
        if let Some(v) = self.alert.as_ref() {
            struct_ser.serialize_field("alert", v)?;
        }
        if self.success {
            struct_ser.serialize_field("success", &self.success)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for AcknowledgeAlertResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "alert",
            "success",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Alert,
            Success,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "alert" => Ok(GeneratedField::Alert),
                            "success" => Ok(GeneratedField::Success),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = AcknowledgeAlertResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.AcknowledgeAlertResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<AcknowledgeAlertResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut alert__ = None;
                let mut success__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Alert => {
                            if alert__.is_some() {
                                return Err(serde::de::Error::duplicate_field("alert"));
                            }
                            alert__ = map_.next_value()?;
                        }
                        GeneratedField::Success => {
                            if success__.is_some() {
                                return Err(serde::de::Error::duplicate_field("success"));
                            }
                            success__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(AcknowledgeAlertResponse {
                    alert: alert__,
                    success: success__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.AcknowledgeAlertResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for AlertSeverity {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "ALERT_SEVERITY_UNSPECIFIED",
            Self::Info => "ALERT_SEVERITY_INFO",
            Self::Low => "ALERT_SEVERITY_LOW",
            Self::Medium => "ALERT_SEVERITY_MEDIUM",
            Self::High => "ALERT_SEVERITY_HIGH",
            Self::Critical => "ALERT_SEVERITY_CRITICAL",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for AlertSeverity {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "ALERT_SEVERITY_UNSPECIFIED",
            "ALERT_SEVERITY_INFO",
            "ALERT_SEVERITY_LOW",
            "ALERT_SEVERITY_MEDIUM",
            "ALERT_SEVERITY_HIGH",
            "ALERT_SEVERITY_CRITICAL",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = AlertSeverity;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "ALERT_SEVERITY_UNSPECIFIED" => Ok(AlertSeverity::Unspecified),
                    "ALERT_SEVERITY_INFO" => Ok(AlertSeverity::Info),
                    "ALERT_SEVERITY_LOW" => Ok(AlertSeverity::Low),
                    "ALERT_SEVERITY_MEDIUM" => Ok(AlertSeverity::Medium),
                    "ALERT_SEVERITY_HIGH" => Ok(AlertSeverity::High),
                    "ALERT_SEVERITY_CRITICAL" => Ok(AlertSeverity::Critical),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for AlertStatus {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "ALERT_STATUS_UNSPECIFIED",
            Self::Active => "ALERT_STATUS_ACTIVE",
            Self::Acknowledged => "ALERT_STATUS_ACKNOWLEDGED",
            Self::Resolved => "ALERT_STATUS_RESOLVED",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for AlertStatus {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "ALERT_STATUS_UNSPECIFIED",
            "ALERT_STATUS_ACTIVE",
            "ALERT_STATUS_ACKNOWLEDGED",
            "ALERT_STATUS_RESOLVED",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = AlertStatus;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "ALERT_STATUS_UNSPECIFIED" => Ok(AlertStatus::Unspecified),
                    "ALERT_STATUS_ACTIVE" => Ok(AlertStatus::Active),
                    "ALERT_STATUS_ACKNOWLEDGED" => Ok(AlertStatus::Acknowledged),
                    "ALERT_STATUS_RESOLVED" => Ok(AlertStatus::Resolved),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for AssessTradeRiskRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.trade.is_some() {
            len += 1;
        }
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if self.include_factors {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.AssessTradeRiskRequest", len)?;
        if let Some(v) = self.trade.as_ref() {
            struct_ser.serialize_field("trade", v)?;
        }
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if self.include_factors {
            struct_ser.serialize_field("includeFactors", &self.include_factors)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for AssessTradeRiskRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "trade",
            "portfolio_id",
            "portfolioId",
            "include_factors",
            "includeFactors",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Trade,
            PortfolioId,
            IncludeFactors,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "trade" => Ok(GeneratedField::Trade),
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "includeFactors" | "include_factors" => Ok(GeneratedField::IncludeFactors),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = AssessTradeRiskRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.AssessTradeRiskRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<AssessTradeRiskRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut trade__ = None;
                let mut portfolio_id__ = None;
                let mut include_factors__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Trade => {
                            if trade__.is_some() {
                                return Err(serde::de::Error::duplicate_field("trade"));
                            }
                            trade__ = map_.next_value()?;
                        }
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IncludeFactors => {
                            if include_factors__.is_some() {
                                return Err(serde::de::Error::duplicate_field("includeFactors"));
                            }
                            include_factors__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(AssessTradeRiskRequest {
                    trade: trade__,
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    include_factors: include_factors__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.AssessTradeRiskRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for AssessTradeRiskResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.assessment.is_some() {
            len += 1;
        }
        if self.error.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.AssessTradeRiskResponse", len)?;
        if let Some(v) = self.assessment.as_ref() {
            struct_ser.serialize_field("assessment", v)?;
        }
        if let Some(v) = self.error.as_ref() {
            struct_ser.serialize_field("error", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for AssessTradeRiskResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "assessment",
            "error",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Assessment,
            Error,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "assessment" => Ok(GeneratedField::Assessment),
                            "error" => Ok(GeneratedField::Error),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = AssessTradeRiskResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.AssessTradeRiskResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<AssessTradeRiskResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut assessment__ = None;
                let mut error__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Assessment => {
                            if assessment__.is_some() {
                                return Err(serde::de::Error::duplicate_field("assessment"));
                            }
                            assessment__ = map_.next_value()?;
                        }
                        GeneratedField::Error => {
                            if error__.is_some() {
                                return Err(serde::de::Error::duplicate_field("error"));
                            }
                            error__ = map_.next_value()?;
                        }
                    }
                }
                Ok(AssessTradeRiskResponse {
                    assessment: assessment__,
                    error: error__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.AssessTradeRiskResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CalculatePortfolioRiskRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.portfolio.is_some() {
            len += 1;
        }
        if self.var_method != 0 {
            len += 1;
        }
        if self.horizon_days != 0 {
            len += 1;
        }
        if self.include_greeks {
            len += 1;
        }
        if self.include_concentration {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.CalculatePortfolioRiskRequest", len)?;
        if let Some(v) = self.portfolio.as_ref() {
            struct_ser.serialize_field("portfolio", v)?;
        }
        if self.var_method != 0 {
            let v = VarMethod::try_from(self.var_method)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.var_method)))?;
            struct_ser.serialize_field("varMethod", &v)?;
        }
        if self.horizon_days != 0 {
            struct_ser.serialize_field("horizonDays", &self.horizon_days)?;
        }
        if self.include_greeks {
            struct_ser.serialize_field("includeGreeks", &self.include_greeks)?;
        }
        if self.include_concentration {
            struct_ser.serialize_field("includeConcentration", &self.include_concentration)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CalculatePortfolioRiskRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio",
            "var_method",
            "varMethod",
            "horizon_days",
            "horizonDays",
            "include_greeks",
            "includeGreeks",
            "include_concentration",
            "includeConcentration",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Portfolio,
            VarMethod,
            HorizonDays,
            IncludeGreeks,
            IncludeConcentration,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolio" => Ok(GeneratedField::Portfolio),
                            "varMethod" | "var_method" => Ok(GeneratedField::VarMethod),
                            "horizonDays" | "horizon_days" => Ok(GeneratedField::HorizonDays),
                            "includeGreeks" | "include_greeks" => Ok(GeneratedField::IncludeGreeks),
                            "includeConcentration" | "include_concentration" => Ok(GeneratedField::IncludeConcentration),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CalculatePortfolioRiskRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.CalculatePortfolioRiskRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CalculatePortfolioRiskRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio__ = None;
                let mut var_method__ = None;
                let mut horizon_days__ = None;
                let mut include_greeks__ = None;
                let mut include_concentration__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Portfolio => {
                            if portfolio__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolio"));
                            }
                            portfolio__ = map_.next_value()?;
                        }
                        GeneratedField::VarMethod => {
                            if var_method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("varMethod"));
                            }
                            var_method__ = Some(map_.next_value::<VarMethod>()? as i32);
                        }
                        GeneratedField::HorizonDays => {
                            if horizon_days__.is_some() {
                                return Err(serde::de::Error::duplicate_field("horizonDays"));
                            }
                            horizon_days__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::IncludeGreeks => {
                            if include_greeks__.is_some() {
                                return Err(serde::de::Error::duplicate_field("includeGreeks"));
                            }
                            include_greeks__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IncludeConcentration => {
                            if include_concentration__.is_some() {
                                return Err(serde::de::Error::duplicate_field("includeConcentration"));
                            }
                            include_concentration__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(CalculatePortfolioRiskRequest {
                    portfolio: portfolio__,
                    var_method: var_method__.unwrap_or_default(),
                    horizon_days: horizon_days__.unwrap_or_default(),
                    include_greeks: include_greeks__.unwrap_or_default(),
                    include_concentration: include_concentration__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.CalculatePortfolioRiskRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CalculatePortfolioRiskResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.metrics.is_some() {
            len += 1;
        }
        if self.error.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.CalculatePortfolioRiskResponse", len)?;
        if let Some(v) = self.metrics.as_ref() {
            struct_ser.serialize_field("metrics", v)?;
        }
        if let Some(v) = self.error.as_ref() {
            struct_ser.serialize_field("error", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CalculatePortfolioRiskResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "metrics",
            "error",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Metrics,
            Error,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "metrics" => Ok(GeneratedField::Metrics),
                            "error" => Ok(GeneratedField::Error),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CalculatePortfolioRiskResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.CalculatePortfolioRiskResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CalculatePortfolioRiskResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut metrics__ = None;
                let mut error__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Metrics => {
                            if metrics__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metrics"));
                            }
                            metrics__ = map_.next_value()?;
                        }
                        GeneratedField::Error => {
                            if error__.is_some() {
                                return Err(serde::de::Error::duplicate_field("error"));
                            }
                            error__ = map_.next_value()?;
                        }
                    }
                }
                Ok(CalculatePortfolioRiskResponse {
                    metrics: metrics__,
                    error: error__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.CalculatePortfolioRiskResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CheckLimitsRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.account_id.is_empty() {
            len += 1;
        }
        if self.proposed_trade.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.CheckLimitsRequest", len)?;
        if !self.account_id.is_empty() {
            struct_ser.serialize_field("accountId", &self.account_id)?;
        }
        if let Some(v) = self.proposed_trade.as_ref() {
            struct_ser.serialize_field("proposedTrade", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CheckLimitsRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "account_id",
            "accountId",
            "proposed_trade",
            "proposedTrade",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            AccountId,
            ProposedTrade,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "accountId" | "account_id" => Ok(GeneratedField::AccountId),
                            "proposedTrade" | "proposed_trade" => Ok(GeneratedField::ProposedTrade),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CheckLimitsRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.CheckLimitsRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CheckLimitsRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut account_id__ = None;
                let mut proposed_trade__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::AccountId => {
                            if account_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("accountId"));
                            }
                            account_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ProposedTrade => {
                            if proposed_trade__.is_some() {
                                return Err(serde::de::Error::duplicate_field("proposedTrade"));
                            }
                            proposed_trade__ = map_.next_value()?;
                        }
                    }
                }
                Ok(CheckLimitsRequest {
                    account_id: account_id__.unwrap_or_default(),
                    proposed_trade: proposed_trade__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.CheckLimitsRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CheckLimitsResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.within_limits {
            len += 1;
        }
        if !self.utilizations.is_empty() {
            len += 1;
        }
        if !self.breaches.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.CheckLimitsResponse", len)?;
        if self.within_limits {
            struct_ser.serialize_field("withinLimits", &self.within_limits)?;
        }
        if !self.utilizations.is_empty() {
            struct_ser.serialize_field("utilizations", &self.utilizations)?;
        }
        if !self.breaches.is_empty() {
            struct_ser.serialize_field("breaches", &self.breaches)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CheckLimitsResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "within_limits",
            "withinLimits",
            "utilizations",
            "breaches",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            WithinLimits,
            Utilizations,
            Breaches,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "withinLimits" | "within_limits" => Ok(GeneratedField::WithinLimits),
                            "utilizations" => Ok(GeneratedField::Utilizations),
                            "breaches" => Ok(GeneratedField::Breaches),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CheckLimitsResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.CheckLimitsResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CheckLimitsResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut within_limits__ = None;
                let mut utilizations__ = None;
                let mut breaches__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::WithinLimits => {
                            if within_limits__.is_some() {
                                return Err(serde::de::Error::duplicate_field("withinLimits"));
                            }
                            within_limits__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Utilizations => {
                            if utilizations__.is_some() {
                                return Err(serde::de::Error::duplicate_field("utilizations"));
                            }
                            utilizations__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Breaches => {
                            if breaches__.is_some() {
                                return Err(serde::de::Error::duplicate_field("breaches"));
                            }
                            breaches__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(CheckLimitsResponse {
                    within_limits: within_limits__.unwrap_or_default(),
                    utilizations: utilizations__.unwrap_or_default(),
                    breaches: breaches__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.CheckLimitsResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ComplianceCheckRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.entity_id.is_empty() {
            len += 1;
        }
        if !self.entity_type.is_empty() {
            len += 1;
        }
        if self.portfolio.is_some() {
            len += 1;
        }
        if self.transaction.is_some() {
            len += 1;
        }
        if !self.rule_ids.is_empty() {
            len += 1;
        }
        if !self.jurisdiction.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ComplianceCheckRequest", len)?;
        if !self.entity_id.is_empty() {
            struct_ser.serialize_field("entityId", &self.entity_id)?;
        }
        if !self.entity_type.is_empty() {
            struct_ser.serialize_field("entityType", &self.entity_type)?;
        }
        if let Some(v) = self.portfolio.as_ref() {
            struct_ser.serialize_field("portfolio", v)?;
        }
        if let Some(v) = self.transaction.as_ref() {
            struct_ser.serialize_field("transaction", v)?;
        }
        if !self.rule_ids.is_empty() {
            struct_ser.serialize_field("ruleIds", &self.rule_ids)?;
        }
        if !self.jurisdiction.is_empty() {
            struct_ser.serialize_field("jurisdiction", &self.jurisdiction)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ComplianceCheckRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "entity_id",
            "entityId",
            "entity_type",
            "entityType",
            "portfolio",
            "transaction",
            "rule_ids",
            "ruleIds",
            "jurisdiction",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            EntityId,
            EntityType,
            Portfolio,
            Transaction,
            RuleIds,
            Jurisdiction,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "entityId" | "entity_id" => Ok(GeneratedField::EntityId),
                            "entityType" | "entity_type" => Ok(GeneratedField::EntityType),
                            "portfolio" => Ok(GeneratedField::Portfolio),
                            "transaction" => Ok(GeneratedField::Transaction),
                            "ruleIds" | "rule_ids" => Ok(GeneratedField::RuleIds),
                            "jurisdiction" => Ok(GeneratedField::Jurisdiction),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ComplianceCheckRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ComplianceCheckRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ComplianceCheckRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut entity_id__ = None;
                let mut entity_type__ = None;
                let mut portfolio__ = None;
                let mut transaction__ = None;
                let mut rule_ids__ = None;
                let mut jurisdiction__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::EntityId => {
                            if entity_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("entityId"));
                            }
                            entity_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::EntityType => {
                            if entity_type__.is_some() {
                                return Err(serde::de::Error::duplicate_field("entityType"));
                            }
                            entity_type__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Portfolio => {
                            if portfolio__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolio"));
                            }
                            portfolio__ = map_.next_value()?;
                        }
                        GeneratedField::Transaction => {
                            if transaction__.is_some() {
                                return Err(serde::de::Error::duplicate_field("transaction"));
                            }
                            transaction__ = map_.next_value()?;
                        }
                        GeneratedField::RuleIds => {
                            if rule_ids__.is_some() {
                                return Err(serde::de::Error::duplicate_field("ruleIds"));
                            }
                            rule_ids__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Jurisdiction => {
                            if jurisdiction__.is_some() {
                                return Err(serde::de::Error::duplicate_field("jurisdiction"));
                            }
                            jurisdiction__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ComplianceCheckRequest {
                    entity_id: entity_id__.unwrap_or_default(),
                    entity_type: entity_type__.unwrap_or_default(),
                    portfolio: portfolio__,
                    transaction: transaction__,
                    rule_ids: rule_ids__.unwrap_or_default(),
                    jurisdiction: jurisdiction__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ComplianceCheckRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ComplianceCheckResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.result.is_some() {
            len += 1;
        }
        if self.error.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ComplianceCheckResponse", len)?;
        if let Some(v) = self.result.as_ref() {
            struct_ser.serialize_field("result", v)?;
        }
        if let Some(v) = self.error.as_ref() {
            struct_ser.serialize_field("error", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ComplianceCheckResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "result",
            "error",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Result,
            Error,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "result" => Ok(GeneratedField::Result),
                            "error" => Ok(GeneratedField::Error),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ComplianceCheckResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ComplianceCheckResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ComplianceCheckResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut result__ = None;
                let mut error__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Result => {
                            if result__.is_some() {
                                return Err(serde::de::Error::duplicate_field("result"));
                            }
                            result__ = map_.next_value()?;
                        }
                        GeneratedField::Error => {
                            if error__.is_some() {
                                return Err(serde::de::Error::duplicate_field("error"));
                            }
                            error__ = map_.next_value()?;
                        }
                    }
                }
                Ok(ComplianceCheckResponse {
                    result: result__,
                    error: error__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ComplianceCheckResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ComplianceCheckResult {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.entity_id.is_empty() {
            len += 1;
        }
        if self.status != 0 {
            len += 1;
        }
        if !self.violations.is_empty() {
            len += 1;
        }
        if !self.passed_rules.is_empty() {
            len += 1;
        }
        if !self.checked_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ComplianceCheckResult", len)?;
        if !self.entity_id.is_empty() {
            struct_ser.serialize_field("entityId", &self.entity_id)?;
        }
        if self.status != 0 {
            let v = ComplianceStatus::try_from(self.status)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.status)))?;
            struct_ser.serialize_field("status", &v)?;
        }
        if !self.violations.is_empty() {
            struct_ser.serialize_field("violations", &self.violations)?;
        }
        if !self.passed_rules.is_empty() {
            struct_ser.serialize_field("passedRules", &self.passed_rules)?;
        }
        if !self.checked_at.is_empty() {
            struct_ser.serialize_field("checkedAt", &self.checked_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ComplianceCheckResult {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "entity_id",
            "entityId",
            "status",
            "violations",
            "passed_rules",
            "passedRules",
            "checked_at",
            "checkedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            EntityId,
            Status,
            Violations,
            PassedRules,
            CheckedAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "entityId" | "entity_id" => Ok(GeneratedField::EntityId),
                            "status" => Ok(GeneratedField::Status),
                            "violations" => Ok(GeneratedField::Violations),
                            "passedRules" | "passed_rules" => Ok(GeneratedField::PassedRules),
                            "checkedAt" | "checked_at" => Ok(GeneratedField::CheckedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ComplianceCheckResult;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ComplianceCheckResult")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ComplianceCheckResult, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut entity_id__ = None;
                let mut status__ = None;
                let mut violations__ = None;
                let mut passed_rules__ = None;
                let mut checked_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::EntityId => {
                            if entity_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("entityId"));
                            }
                            entity_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = Some(map_.next_value::<ComplianceStatus>()? as i32);
                        }
                        GeneratedField::Violations => {
                            if violations__.is_some() {
                                return Err(serde::de::Error::duplicate_field("violations"));
                            }
                            violations__ = Some(map_.next_value()?);
                        }
                        GeneratedField::PassedRules => {
                            if passed_rules__.is_some() {
                                return Err(serde::de::Error::duplicate_field("passedRules"));
                            }
                            passed_rules__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CheckedAt => {
                            if checked_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("checkedAt"));
                            }
                            checked_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ComplianceCheckResult {
                    entity_id: entity_id__.unwrap_or_default(),
                    status: status__.unwrap_or_default(),
                    violations: violations__.unwrap_or_default(),
                    passed_rules: passed_rules__.unwrap_or_default(),
                    checked_at: checked_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ComplianceCheckResult", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ComplianceRule {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.rule_id.is_empty() {
            len += 1;
        }
        if !self.name.is_empty() {
            len += 1;
        }
        if !self.description.is_empty() {
            len += 1;
        }
        if self.category != 0 {
            len += 1;
        }
        if !self.jurisdiction.is_empty() {
            len += 1;
        }
        if self.enabled {
            len += 1;
        }
        if self.threshold != 0. {
            len += 1;
        }
        if !self.parameters.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ComplianceRule", len)?;
        if !self.rule_id.is_empty() {
            struct_ser.serialize_field("ruleId", &self.rule_id)?;
        }
        if !self.name.is_empty() {
            struct_ser.serialize_field("name", &self.name)?;
        }
        if !self.description.is_empty() {
            struct_ser.serialize_field("description", &self.description)?;
        }
        if self.category != 0 {
            let v = RiskCategory::try_from(self.category)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.category)))?;
            struct_ser.serialize_field("category", &v)?;
        }
        if !self.jurisdiction.is_empty() {
            struct_ser.serialize_field("jurisdiction", &self.jurisdiction)?;
        }
        if self.enabled {
            struct_ser.serialize_field("enabled", &self.enabled)?;
        }
        if self.threshold != 0. {
            struct_ser.serialize_field("threshold", &self.threshold)?;
        }
        if !self.parameters.is_empty() {
            struct_ser.serialize_field("parameters", &self.parameters)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ComplianceRule {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "rule_id",
            "ruleId",
            "name",
            "description",
            "category",
            "jurisdiction",
            "enabled",
            "threshold",
            "parameters",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            RuleId,
            Name,
            Description,
            Category,
            Jurisdiction,
            Enabled,
            Threshold,
            Parameters,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "ruleId" | "rule_id" => Ok(GeneratedField::RuleId),
                            "name" => Ok(GeneratedField::Name),
                            "description" => Ok(GeneratedField::Description),
                            "category" => Ok(GeneratedField::Category),
                            "jurisdiction" => Ok(GeneratedField::Jurisdiction),
                            "enabled" => Ok(GeneratedField::Enabled),
                            "threshold" => Ok(GeneratedField::Threshold),
                            "parameters" => Ok(GeneratedField::Parameters),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ComplianceRule;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ComplianceRule")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ComplianceRule, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut rule_id__ = None;
                let mut name__ = None;
                let mut description__ = None;
                let mut category__ = None;
                let mut jurisdiction__ = None;
                let mut enabled__ = None;
                let mut threshold__ = None;
                let mut parameters__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::RuleId => {
                            if rule_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("ruleId"));
                            }
                            rule_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Name => {
                            if name__.is_some() {
                                return Err(serde::de::Error::duplicate_field("name"));
                            }
                            name__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Description => {
                            if description__.is_some() {
                                return Err(serde::de::Error::duplicate_field("description"));
                            }
                            description__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Category => {
                            if category__.is_some() {
                                return Err(serde::de::Error::duplicate_field("category"));
                            }
                            category__ = Some(map_.next_value::<RiskCategory>()? as i32);
                        }
                        GeneratedField::Jurisdiction => {
                            if jurisdiction__.is_some() {
                                return Err(serde::de::Error::duplicate_field("jurisdiction"));
                            }
                            jurisdiction__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Enabled => {
                            if enabled__.is_some() {
                                return Err(serde::de::Error::duplicate_field("enabled"));
                            }
                            enabled__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Threshold => {
                            if threshold__.is_some() {
                                return Err(serde::de::Error::duplicate_field("threshold"));
                            }
                            threshold__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Parameters => {
                            if parameters__.is_some() {
                                return Err(serde::de::Error::duplicate_field("parameters"));
                            }
                            parameters__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, _>>()?
                            );
                        }
                    }
                }
                Ok(ComplianceRule {
                    rule_id: rule_id__.unwrap_or_default(),
                    name: name__.unwrap_or_default(),
                    description: description__.unwrap_or_default(),
                    category: category__.unwrap_or_default(),
                    jurisdiction: jurisdiction__.unwrap_or_default(),
                    enabled: enabled__.unwrap_or_default(),
                    threshold: threshold__.unwrap_or_default(),
                    parameters: parameters__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ComplianceRule", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ComplianceStatus {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "COMPLIANCE_STATUS_UNSPECIFIED",
            Self::Compliant => "COMPLIANCE_STATUS_COMPLIANT",
            Self::NonCompliant => "COMPLIANCE_STATUS_NON_COMPLIANT",
            Self::PendingReview => "COMPLIANCE_STATUS_PENDING_REVIEW",
            Self::Exempt => "COMPLIANCE_STATUS_EXEMPT",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for ComplianceStatus {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "COMPLIANCE_STATUS_UNSPECIFIED",
            "COMPLIANCE_STATUS_COMPLIANT",
            "COMPLIANCE_STATUS_NON_COMPLIANT",
            "COMPLIANCE_STATUS_PENDING_REVIEW",
            "COMPLIANCE_STATUS_EXEMPT",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ComplianceStatus;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "COMPLIANCE_STATUS_UNSPECIFIED" => Ok(ComplianceStatus::Unspecified),
                    "COMPLIANCE_STATUS_COMPLIANT" => Ok(ComplianceStatus::Compliant),
                    "COMPLIANCE_STATUS_NON_COMPLIANT" => Ok(ComplianceStatus::NonCompliant),
                    "COMPLIANCE_STATUS_PENDING_REVIEW" => Ok(ComplianceStatus::PendingReview),
                    "COMPLIANCE_STATUS_EXEMPT" => Ok(ComplianceStatus::Exempt),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for ComplianceViolation {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.rule_id.is_empty() {
            len += 1;
        }
        if !self.rule_name.is_empty() {
            len += 1;
        }
        if self.severity != 0 {
            len += 1;
        }
        if !self.message.is_empty() {
            len += 1;
        }
        if self.observed_value != 0. {
            len += 1;
        }
        if self.threshold != 0. {
            len += 1;
        }
        if !self.detected_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ComplianceViolation", len)?;
        if !self.rule_id.is_empty() {
            struct_ser.serialize_field("ruleId", &self.rule_id)?;
        }
        if !self.rule_name.is_empty() {
            struct_ser.serialize_field("ruleName", &self.rule_name)?;
        }
        if self.severity != 0 {
            let v = AlertSeverity::try_from(self.severity)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.severity)))?;
            struct_ser.serialize_field("severity", &v)?;
        }
        if !self.message.is_empty() {
            struct_ser.serialize_field("message", &self.message)?;
        }
        if self.observed_value != 0. {
            struct_ser.serialize_field("observedValue", &self.observed_value)?;
        }
        if self.threshold != 0. {
            struct_ser.serialize_field("threshold", &self.threshold)?;
        }
        if !self.detected_at.is_empty() {
            struct_ser.serialize_field("detectedAt", &self.detected_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ComplianceViolation {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "rule_id",
            "ruleId",
            "rule_name",
            "ruleName",
            "severity",
            "message",
            "observed_value",
            "observedValue",
            "threshold",
            "detected_at",
            "detectedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            RuleId,
            RuleName,
            Severity,
            Message,
            ObservedValue,
            Threshold,
            DetectedAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "ruleId" | "rule_id" => Ok(GeneratedField::RuleId),
                            "ruleName" | "rule_name" => Ok(GeneratedField::RuleName),
                            "severity" => Ok(GeneratedField::Severity),
                            "message" => Ok(GeneratedField::Message),
                            "observedValue" | "observed_value" => Ok(GeneratedField::ObservedValue),
                            "threshold" => Ok(GeneratedField::Threshold),
                            "detectedAt" | "detected_at" => Ok(GeneratedField::DetectedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ComplianceViolation;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ComplianceViolation")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ComplianceViolation, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut rule_id__ = None;
                let mut rule_name__ = None;
                let mut severity__ = None;
                let mut message__ = None;
                let mut observed_value__ = None;
                let mut threshold__ = None;
                let mut detected_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::RuleId => {
                            if rule_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("ruleId"));
                            }
                            rule_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::RuleName => {
                            if rule_name__.is_some() {
                                return Err(serde::de::Error::duplicate_field("ruleName"));
                            }
                            rule_name__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Severity => {
                            if severity__.is_some() {
                                return Err(serde::de::Error::duplicate_field("severity"));
                            }
                            severity__ = Some(map_.next_value::<AlertSeverity>()? as i32);
                        }
                        GeneratedField::Message => {
                            if message__.is_some() {
                                return Err(serde::de::Error::duplicate_field("message"));
                            }
                            message__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ObservedValue => {
                            if observed_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("observedValue"));
                            }
                            observed_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Threshold => {
                            if threshold__.is_some() {
                                return Err(serde::de::Error::duplicate_field("threshold"));
                            }
                            threshold__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::DetectedAt => {
                            if detected_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("detectedAt"));
                            }
                            detected_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ComplianceViolation {
                    rule_id: rule_id__.unwrap_or_default(),
                    rule_name: rule_name__.unwrap_or_default(),
                    severity: severity__.unwrap_or_default(),
                    message: message__.unwrap_or_default(),
                    observed_value: observed_value__.unwrap_or_default(),
                    threshold: threshold__.unwrap_or_default(),
                    detected_at: detected_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ComplianceViolation", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ConcentrationMetrics {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.herfindahl_index != 0. {
            len += 1;
        }
        if self.top_position_weight != 0. {
            len += 1;
        }
        if self.top_five_weight != 0. {
            len += 1;
        }
        if !self.sector_weights.is_empty() {
            len += 1;
        }
        if self.position_count != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ConcentrationMetrics", len)?;
        if self.herfindahl_index != 0. {
            struct_ser.serialize_field("herfindahlIndex", &self.herfindahl_index)?;
        }
        if self.top_position_weight != 0. {
            struct_ser.serialize_field("topPositionWeight", &self.top_position_weight)?;
        }
        if self.top_five_weight != 0. {
            struct_ser.serialize_field("topFiveWeight", &self.top_five_weight)?;
        }
        if !self.sector_weights.is_empty() {
            struct_ser.serialize_field("sectorWeights", &self.sector_weights)?;
        }
        if self.position_count != 0 {
            struct_ser.serialize_field("positionCount", &self.position_count)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ConcentrationMetrics {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "herfindahl_index",
            "herfindahlIndex",
            "top_position_weight",
            "topPositionWeight",
            "top_five_weight",
            "topFiveWeight",
            "sector_weights",
            "sectorWeights",
            "position_count",
            "positionCount",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            HerfindahlIndex,
            TopPositionWeight,
            TopFiveWeight,
            SectorWeights,
            PositionCount,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "herfindahlIndex" | "herfindahl_index" => Ok(GeneratedField::HerfindahlIndex),
                            "topPositionWeight" | "top_position_weight" => Ok(GeneratedField::TopPositionWeight),
                            "topFiveWeight" | "top_five_weight" => Ok(GeneratedField::TopFiveWeight),
                            "sectorWeights" | "sector_weights" => Ok(GeneratedField::SectorWeights),
                            "positionCount" | "position_count" => Ok(GeneratedField::PositionCount),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ConcentrationMetrics;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ConcentrationMetrics")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ConcentrationMetrics, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut herfindahl_index__ = None;
                let mut top_position_weight__ = None;
                let mut top_five_weight__ = None;
                let mut sector_weights__ = None;
                let mut position_count__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::HerfindahlIndex => {
                            if herfindahl_index__.is_some() {
                                return Err(serde::de::Error::duplicate_field("herfindahlIndex"));
                            }
                            herfindahl_index__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::TopPositionWeight => {
                            if top_position_weight__.is_some() {
                                return Err(serde::de::Error::duplicate_field("topPositionWeight"));
                            }
                            top_position_weight__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::TopFiveWeight => {
                            if top_five_weight__.is_some() {
                                return Err(serde::de::Error::duplicate_field("topFiveWeight"));
                            }
                            top_five_weight__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::SectorWeights => {
                            if sector_weights__.is_some() {
                                return Err(serde::de::Error::duplicate_field("sectorWeights"));
                            }
                            sector_weights__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, ::pbjson::private::NumberDeserialize<f64>>>()?
                                    .into_iter().map(|(k,v)| (k, v.0)).collect()
                            );
                        }
                        GeneratedField::PositionCount => {
                            if position_count__.is_some() {
                                return Err(serde::de::Error::duplicate_field("positionCount"));
                            }
                            position_count__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(ConcentrationMetrics {
                    herfindahl_index: herfindahl_index__.unwrap_or_default(),
                    top_position_weight: top_position_weight__.unwrap_or_default(),
                    top_five_weight: top_five_weight__.unwrap_or_default(),
                    sector_weights: sector_weights__.unwrap_or_default(),
                    position_count: position_count__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ConcentrationMetrics", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CounterpartyExposure {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.counterparty_id.is_empty() {
            len += 1;
        }
        if !self.name.is_empty() {
            len += 1;
        }
        if self.gross_exposure != 0. {
            len += 1;
        }
        if self.net_exposure != 0. {
            len += 1;
        }
        if self.collateral != 0. {
            len += 1;
        }
        if !self.credit_rating.is_empty() {
            len += 1;
        }
        if self.probability_of_default != 0. {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.CounterpartyExposure", len)?;
        if !self.counterparty_id.is_empty() {
            struct_ser.serialize_field("counterpartyId", &self.counterparty_id)?;
        }
        if !self.name.is_empty() {
            struct_ser.serialize_field("name", &self.name)?;
        }
        if self.gross_exposure != 0. {
            struct_ser.serialize_field("grossExposure", &self.gross_exposure)?;
        }
        if self.net_exposure != 0. {
            struct_ser.serialize_field("netExposure", &self.net_exposure)?;
        }
        if self.collateral != 0. {
            struct_ser.serialize_field("collateral", &self.collateral)?;
        }
        if !self.credit_rating.is_empty() {
            struct_ser.serialize_field("creditRating", &self.credit_rating)?;
        }
        if self.probability_of_default != 0. {
            struct_ser.serialize_field("probabilityOfDefault", &self.probability_of_default)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CounterpartyExposure {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "counterparty_id",
            "counterpartyId",
            "name",
            "gross_exposure",
            "grossExposure",
            "net_exposure",
            "netExposure",
            "collateral",
            "credit_rating",
            "creditRating",
            "probability_of_default",
            "probabilityOfDefault",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            CounterpartyId,
            Name,
            GrossExposure,
            NetExposure,
            Collateral,
            CreditRating,
            ProbabilityOfDefault,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "counterpartyId" | "counterparty_id" => Ok(GeneratedField::CounterpartyId),
                            "name" => Ok(GeneratedField::Name),
                            "grossExposure" | "gross_exposure" => Ok(GeneratedField::GrossExposure),
                            "netExposure" | "net_exposure" => Ok(GeneratedField::NetExposure),
                            "collateral" => Ok(GeneratedField::Collateral),
                            "creditRating" | "credit_rating" => Ok(GeneratedField::CreditRating),
                            "probabilityOfDefault" | "probability_of_default" => Ok(GeneratedField::ProbabilityOfDefault),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CounterpartyExposure;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.CounterpartyExposure")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CounterpartyExposure, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut counterparty_id__ = None;
                let mut name__ = None;
                let mut gross_exposure__ = None;
                let mut net_exposure__ = None;
                let mut collateral__ = None;
                let mut credit_rating__ = None;
                let mut probability_of_default__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::CounterpartyId => {
                            if counterparty_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("counterpartyId"));
                            }
                            counterparty_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Name => {
                            if name__.is_some() {
                                return Err(serde::de::Error::duplicate_field("name"));
                            }
                            name__ = Some(map_.next_value()?);
                        }
                        GeneratedField::GrossExposure => {
                            if gross_exposure__.is_some() {
                                return Err(serde::de::Error::duplicate_field("grossExposure"));
                            }
                            gross_exposure__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::NetExposure => {
                            if net_exposure__.is_some() {
                                return Err(serde::de::Error::duplicate_field("netExposure"));
                            }
                            net_exposure__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Collateral => {
                            if collateral__.is_some() {
                                return Err(serde::de::Error::duplicate_field("collateral"));
                            }
                            collateral__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::CreditRating => {
                            if credit_rating__.is_some() {
                                return Err(serde::de::Error::duplicate_field("creditRating"));
                            }
                            credit_rating__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ProbabilityOfDefault => {
                            if probability_of_default__.is_some() {
                                return Err(serde::de::Error::duplicate_field("probabilityOfDefault"));
                            }
                            probability_of_default__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(CounterpartyExposure {
                    counterparty_id: counterparty_id__.unwrap_or_default(),
                    name: name__.unwrap_or_default(),
                    gross_exposure: gross_exposure__.unwrap_or_default(),
                    net_exposure: net_exposure__.unwrap_or_default(),
                    collateral: collateral__.unwrap_or_default(),
                    credit_rating: credit_rating__.unwrap_or_default(),
                    probability_of_default: probability_of_default__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.CounterpartyExposure", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for DeviceInfo {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.device_id.is_empty() {
            len += 1;
        }
        if !self.ip_address.is_empty() {
            len += 1;
        }
        if !self.user_agent.is_empty() {
            len += 1;
        }
        if !self.fingerprint.is_empty() {
            len += 1;
        }
        if !self.geo_country.is_empty() {
            len += 1;
        }
        if self.is_new_device {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.DeviceInfo", len)?;
        if !self.device_id.is_empty() {
            struct_ser.serialize_field("deviceId", &self.device_id)?;
        }
        if !self.ip_address.is_empty() {
            struct_ser.serialize_field("ipAddress", &self.ip_address)?;
        }
        if !self.user_agent.is_empty() {
            struct_ser.serialize_field("userAgent", &self.user_agent)?;
        }
        if !self.fingerprint.is_empty() {
            struct_ser.serialize_field("fingerprint", &self.fingerprint)?;
        }
        if !self.geo_country.is_empty() {
            struct_ser.serialize_field("geoCountry", &self.geo_country)?;
        }
        if self.is_new_device {
            struct_ser.serialize_field("isNewDevice", &self.is_new_device)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for DeviceInfo {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "device_id",
            "deviceId",
            "ip_address",
            "ipAddress",
            "user_agent",
            "userAgent",
            "fingerprint",
            "geo_country",
            "geoCountry",
            "is_new_device",
            "isNewDevice",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            DeviceId,
            IpAddress,
            UserAgent,
            Fingerprint,
            GeoCountry,
            IsNewDevice,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "deviceId" | "device_id" => Ok(GeneratedField::DeviceId),
                            "ipAddress" | "ip_address" => Ok(GeneratedField::IpAddress),
                            "userAgent" | "user_agent" => Ok(GeneratedField::UserAgent),
                            "fingerprint" => Ok(GeneratedField::Fingerprint),
                            "geoCountry" | "geo_country" => Ok(GeneratedField::GeoCountry),
                            "isNewDevice" | "is_new_device" => Ok(GeneratedField::IsNewDevice),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = DeviceInfo;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.DeviceInfo")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<DeviceInfo, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut device_id__ = None;
                let mut ip_address__ = None;
                let mut user_agent__ = None;
                let mut fingerprint__ = None;
                let mut geo_country__ = None;
                let mut is_new_device__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::DeviceId => {
                            if device_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("deviceId"));
                            }
                            device_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IpAddress => {
                            if ip_address__.is_some() {
                                return Err(serde::de::Error::duplicate_field("ipAddress"));
                            }
                            ip_address__ = Some(map_.next_value()?);
                        }
                        GeneratedField::UserAgent => {
                            if user_agent__.is_some() {
                                return Err(serde::de::Error::duplicate_field("userAgent"));
                            }
                            user_agent__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Fingerprint => {
                            if fingerprint__.is_some() {
                                return Err(serde::de::Error::duplicate_field("fingerprint"));
                            }
                            fingerprint__ = Some(map_.next_value()?);
                        }
                        GeneratedField::GeoCountry => {
                            if geo_country__.is_some() {
                                return Err(serde::de::Error::duplicate_field("geoCountry"));
                            }
                            geo_country__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IsNewDevice => {
                            if is_new_device__.is_some() {
                                return Err(serde::de::Error::duplicate_field("isNewDevice"));
                            }
                            is_new_device__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(DeviceInfo {
                    device_id: device_id__.unwrap_or_default(),
                    ip_address: ip_address__.unwrap_or_default(),
                    user_agent: user_agent__.unwrap_or_default(),
                    fingerprint: fingerprint__.unwrap_or_default(),
                    geo_country: geo_country__.unwrap_or_default(),
                    is_new_device: is_new_device__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.DeviceInfo", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ExpectedShortfall {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.es_95 != 0. {
            len += 1;
        }
        if self.es_99 != 0. {
            len += 1;
        }
        if self.es_999 != 0. {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ExpectedShortfall", len)?;
        if self.es_95 != 0. {
            struct_ser.serialize_field("es95", &self.es_95)?;
        }
        if self.es_99 != 0. {
            struct_ser.serialize_field("es99", &self.es_99)?;
        }
        if self.es_999 != 0. {
            struct_ser.serialize_field("es999", &self.es_999)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ExpectedShortfall {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "es_95",
            "es95",
            "es_99",
            "es99",
            "es_999",
            "es999",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Es95,
            Es99,
            Es999,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "es95" | "es_95" => Ok(GeneratedField::Es95),
                            "es99" | "es_99" => Ok(GeneratedField::Es99),
                            "es999" | "es_999" => Ok(GeneratedField::Es999),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ExpectedShortfall;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ExpectedShortfall")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ExpectedShortfall, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut es_95__ = None;
                let mut es_99__ = None;
                let mut es_999__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Es95 => {
                            if es_95__.is_some() {
                                return Err(serde::de::Error::duplicate_field("es95"));
                            }
                            es_95__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Es99 => {
                            if es_99__.is_some() {
                                return Err(serde::de::Error::duplicate_field("es99"));
                            }
                            es_99__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Es999 => {
                            if es_999__.is_some() {
                                return Err(serde::de::Error::duplicate_field("es999"));
                            }
                            es_999__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(ExpectedShortfall {
                    es_95: es_95__.unwrap_or_default(),
                    es_99: es_99__.unwrap_or_default(),
                    es_999: es_999__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ExpectedShortfall", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for FraudCheckRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.transaction.is_some() {
            len += 1;
        }
        if self.history_window_days != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.FraudCheckRequest", len)?;
        if let Some(v) = self.transaction.as_ref() {
            struct_ser.serialize_field("transaction", v)?;
        }
        if self.history_window_days != 0 {
            struct_ser.serialize_field("historyWindowDays", &self.history_window_days)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for FraudCheckRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "transaction",
            "history_window_days",
            "historyWindowDays",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Transaction,
            HistoryWindowDays,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "transaction" => Ok(GeneratedField::Transaction),
                            "historyWindowDays" | "history_window_days" => Ok(GeneratedField::HistoryWindowDays),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = FraudCheckRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.FraudCheckRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<FraudCheckRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut transaction__ = None;
                let mut history_window_days__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Transaction => {
                            if transaction__.is_some() {
                                return Err(serde::de::Error::duplicate_field("transaction"));
                            }
                            transaction__ = map_.next_value()?;
                        }
                        GeneratedField::HistoryWindowDays => {
                            if history_window_days__.is_some() {
                                return Err(serde::de::Error::duplicate_field("historyWindowDays"));
                            }
                            history_window_days__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(FraudCheckRequest {
                    transaction: transaction__,
                    history_window_days: history_window_days__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.FraudCheckRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for FraudCheckResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.result.is_some() {
            len += 1;
        }
        if self.error.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.FraudCheckResponse", len)?;
        if let Some(v) = self.result.as_ref() {
            struct_ser.serialize_field("result", v)?;
        }
        if let Some(v) = self.error.as_ref() {
            struct_ser.serialize_field("error", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for FraudCheckResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "result",
            "error",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Result,
            Error,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "result" => Ok(GeneratedField::Result),
                            "error" => Ok(GeneratedField::Error),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = FraudCheckResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.FraudCheckResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<FraudCheckResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut result__ = None;
                let mut error__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Result => {
                            if result__.is_some() {
                                return Err(serde::de::Error::duplicate_field("result"));
                            }
                            result__ = map_.next_value()?;
                        }
                        GeneratedField::Error => {
                            if error__.is_some() {
                                return Err(serde::de::Error::duplicate_field("error"));
                            }
                            error__ = map_.next_value()?;
                        }
                    }
                }
                Ok(FraudCheckResponse {
                    result: result__,
                    error: error__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.FraudCheckResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for FraudCheckResult {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.transaction_id.is_empty() {
            len += 1;
        }
        if self.fraud_score != 0. {
            len += 1;
        }
        if self.risk_level != 0 {
            len += 1;
        }
        if self.decision != 0 {
            len += 1;
        }
        if !self.signals.is_empty() {
            len += 1;
        }
        if !self.reasons.is_empty() {
            len += 1;
        }
        if !self.model_version.is_empty() {
            len += 1;
        }
        if !self.checked_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.FraudCheckResult", len)?;
        if !self.transaction_id.is_empty() {
            struct_ser.serialize_field("transactionId", &self.transaction_id)?;
        }
        if self.fraud_score != 0. {
            struct_ser.serialize_field("fraudScore", &self.fraud_score)?;
        }
        if self.risk_level != 0 {
            let v = RiskLevel::try_from(self.risk_level)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.risk_level)))?;
            struct_ser.serialize_field("riskLevel", &v)?;
        }
        if self.decision != 0 {
            let v = FraudDecision::try_from(self.decision)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.decision)))?;
            struct_ser.serialize_field("decision", &v)?;
        }
        if !self.signals.is_empty() {
            struct_ser.serialize_field("signals", &self.signals)?;
        }
        if !self.reasons.is_empty() {
            struct_ser.serialize_field("reasons", &self.reasons)?;
        }
        if !self.model_version.is_empty() {
            struct_ser.serialize_field("modelVersion", &self.model_version)?;
        }
        if !self.checked_at.is_empty() {
            struct_ser.serialize_field("checkedAt", &self.checked_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for FraudCheckResult {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "transaction_id",
            "transactionId",
            "fraud_score",
            "fraudScore",
            "risk_level",
            "riskLevel",
            "decision",
            "signals",
            "reasons",
            "model_version",
            "modelVersion",
            "checked_at",
            "checkedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            TransactionId,
            FraudScore,
            RiskLevel,
            Decision,
            Signals,
            Reasons,
            ModelVersion,
            CheckedAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "transactionId" | "transaction_id" => Ok(GeneratedField::TransactionId),
                            "fraudScore" | "fraud_score" => Ok(GeneratedField::FraudScore),
                            "riskLevel" | "risk_level" => Ok(GeneratedField::RiskLevel),
                            "decision" => Ok(GeneratedField::Decision),
                            "signals" => Ok(GeneratedField::Signals),
                            "reasons" => Ok(GeneratedField::Reasons),
                            "modelVersion" | "model_version" => Ok(GeneratedField::ModelVersion),
                            "checkedAt" | "checked_at" => Ok(GeneratedField::CheckedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = FraudCheckResult;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.FraudCheckResult")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<FraudCheckResult, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut transaction_id__ = None;
                let mut fraud_score__ = None;
                let mut risk_level__ = None;
                let mut decision__ = None;
                let mut signals__ = None;
                let mut reasons__ = None;
                let mut model_version__ = None;
                let mut checked_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::TransactionId => {
                            if transaction_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("transactionId"));
                            }
                            transaction_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::FraudScore => {
                            if fraud_score__.is_some() {
                                return Err(serde::de::Error::duplicate_field("fraudScore"));
                            }
                            fraud_score__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::RiskLevel => {
                            if risk_level__.is_some() {
                                return Err(serde::de::Error::duplicate_field("riskLevel"));
                            }
                            risk_level__ = Some(map_.next_value::<RiskLevel>()? as i32);
                        }
                        GeneratedField::Decision => {
                            if decision__.is_some() {
                                return Err(serde::de::Error::duplicate_field("decision"));
                            }
                            decision__ = Some(map_.next_value::<FraudDecision>()? as i32);
                        }
                        GeneratedField::Signals => {
                            if signals__.is_some() {
                                return Err(serde::de::Error::duplicate_field("signals"));
                            }
                            signals__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Reasons => {
                            if reasons__.is_some() {
                                return Err(serde::de::Error::duplicate_field("reasons"));
                            }
                            reasons__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ModelVersion => {
                            if model_version__.is_some() {
                                return Err(serde::de::Error::duplicate_field("modelVersion"));
                            }
                            model_version__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CheckedAt => {
                            if checked_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("checkedAt"));
                            }
                            checked_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(FraudCheckResult {
                    transaction_id: transaction_id__.unwrap_or_default(),
                    fraud_score: fraud_score__.unwrap_or_default(),
                    risk_level: risk_level__.unwrap_or_default(),
                    decision: decision__.unwrap_or_default(),
                    signals: signals__.unwrap_or_default(),
                    reasons: reasons__.unwrap_or_default(),
                    model_version: model_version__.unwrap_or_default(),
                    checked_at: checked_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.FraudCheckResult", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for FraudDecision {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "FRAUD_DECISION_UNSPECIFIED",
            Self::Approve => "FRAUD_DECISION_APPROVE",
            Self::Review => "FRAUD_DECISION_REVIEW",
            Self::Decline => "FRAUD_DECISION_DECLINE",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for FraudDecision {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "FRAUD_DECISION_UNSPECIFIED",
            "FRAUD_DECISION_APPROVE",
            "FRAUD_DECISION_REVIEW",
            "FRAUD_DECISION_DECLINE",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = FraudDecision;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "FRAUD_DECISION_UNSPECIFIED" => Ok(FraudDecision::Unspecified),
                    "FRAUD_DECISION_APPROVE" => Ok(FraudDecision::Approve),
                    "FRAUD_DECISION_REVIEW" => Ok(FraudDecision::Review),
                    "FRAUD_DECISION_DECLINE" => Ok(FraudDecision::Decline),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for FraudSignal {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.signal_type.is_empty() {
            len += 1;
        }
        if !self.description.is_empty() {
            len += 1;
        }
        if self.weight != 0. {
            len += 1;
        }
        if self.triggered {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.FraudSignal", len)?;
        if !self.signal_type.is_empty() {
            struct_ser.serialize_field("signalType", &self.signal_type)?;
        }
        if !self.description.is_empty() {
            struct_ser.serialize_field("description", &self.description)?;
        }
        if self.weight != 0. {
            struct_ser.serialize_field("weight", &self.weight)?;
        }
        if self.triggered {
            struct_ser.serialize_field("triggered", &self.triggered)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for FraudSignal {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "signal_type",
            "signalType",
            "description",
            "weight",
            "triggered",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            SignalType,
            Description,
            Weight,
            Triggered,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "signalType" | "signal_type" => Ok(GeneratedField::SignalType),
                            "description" => Ok(GeneratedField::Description),
                            "weight" => Ok(GeneratedField::Weight),
                            "triggered" => Ok(GeneratedField::Triggered),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = FraudSignal;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.FraudSignal")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<FraudSignal, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut signal_type__ = None;
                let mut description__ = None;
                let mut weight__ = None;
                let mut triggered__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::SignalType => {
                            if signal_type__.is_some() {
                                return Err(serde::de::Error::duplicate_field("signalType"));
                            }
                            signal_type__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Description => {
                            if description__.is_some() {
                                return Err(serde::de::Error::duplicate_field("description"));
                            }
                            description__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Weight => {
                            if weight__.is_some() {
                                return Err(serde::de::Error::duplicate_field("weight"));
                            }
                            weight__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Triggered => {
                            if triggered__.is_some() {
                                return Err(serde::de::Error::duplicate_field("triggered"));
                            }
                            triggered__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(FraudSignal {
                    signal_type: signal_type__.unwrap_or_default(),
                    description: description__.unwrap_or_default(),
                    weight: weight__.unwrap_or_default(),
                    triggered: triggered__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.FraudSignal", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GenerateRiskReportRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if self.include_stress {
            len += 1;
        }
        if self.include_compliance {
            len += 1;
        }
        if self.include_counterparties {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GenerateRiskReportRequest", len)?;
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if self.include_stress {
            struct_ser.serialize_field("includeStress", &self.include_stress)?;
        }
        if self.include_compliance {
            struct_ser.serialize_field("includeCompliance", &self.include_compliance)?;
        }
        if self.include_counterparties {
            struct_ser.serialize_field("includeCounterparties", &self.include_counterparties)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GenerateRiskReportRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio_id",
            "portfolioId",
            "include_stress",
            "includeStress",
            "include_compliance",
            "includeCompliance",
            "include_counterparties",
            "includeCounterparties",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PortfolioId,
            IncludeStress,
            IncludeCompliance,
            IncludeCounterparties,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "includeStress" | "include_stress" => Ok(GeneratedField::IncludeStress),
                            "includeCompliance" | "include_compliance" => Ok(GeneratedField::IncludeCompliance),
                            "includeCounterparties" | "include_counterparties" => Ok(GeneratedField::IncludeCounterparties),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GenerateRiskReportRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GenerateRiskReportRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GenerateRiskReportRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio_id__ = None;
                let mut include_stress__ = None;
                let mut include_compliance__ = None;
                let mut include_counterparties__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IncludeStress => {
                            if include_stress__.is_some() {
                                return Err(serde::de::Error::duplicate_field("includeStress"));
                            }
                            include_stress__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IncludeCompliance => {
                            if include_compliance__.is_some() {
                                return Err(serde::de::Error::duplicate_field("includeCompliance"));
                            }
                            include_compliance__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IncludeCounterparties => {
                            if include_counterparties__.is_some() {
                                return Err(serde::de::Error::duplicate_field("includeCounterparties"));
                            }
                            include_counterparties__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GenerateRiskReportRequest {
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    include_stress: include_stress__.unwrap_or_default(),
                    include_compliance: include_compliance__.unwrap_or_default(),
                    include_counterparties: include_counterparties__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GenerateRiskReportRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GenerateRiskReportResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.report.is_some() {
            len += 1;
        }
        if self.error.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GenerateRiskReportResponse", len)?;
        if let Some(v) = self.report.as_ref() {
            struct_ser.serialize_field("report", v)?;
        }
        if let Some(v) = self.error.as_ref() {
            struct_ser.serialize_field("error", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GenerateRiskReportResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "report",
            "error",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Report,
            Error,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "report" => Ok(GeneratedField::Report),
                            "error" => Ok(GeneratedField::Error),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GenerateRiskReportResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GenerateRiskReportResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GenerateRiskReportResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut report__ = None;
                let mut error__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Report => {
                            if report__.is_some() {
                                return Err(serde::de::Error::duplicate_field("report"));
                            }
                            report__ = map_.next_value()?;
                        }
                        GeneratedField::Error => {
                            if error__.is_some() {
                                return Err(serde::de::Error::duplicate_field("error"));
                            }
                            error__ = map_.next_value()?;
                        }
                    }
                }
                Ok(GenerateRiskReportResponse {
                    report: report__,
                    error: error__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GenerateRiskReportResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetKycStatusRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.user_id.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GetKycStatusRequest", len)?;
        if !self.user_id.is_empty() {
            struct_ser.serialize_field("userId", &self.user_id)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetKycStatusRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "user_id",
            "userId",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            UserId,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "userId" | "user_id" => Ok(GeneratedField::UserId),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetKycStatusRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GetKycStatusRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetKycStatusRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut user_id__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::UserId => {
                            if user_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("userId"));
                            }
                            user_id__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetKycStatusRequest {
                    user_id: user_id__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GetKycStatusRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetKycStatusResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.status.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GetKycStatusResponse", len)?;
        if let Some(v) = self.status.as_ref() {
            struct_ser.serialize_field("status", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetKycStatusResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "status",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Status,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "status" => Ok(GeneratedField::Status),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetKycStatusResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GetKycStatusResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetKycStatusResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut status__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = map_.next_value()?;
                        }
                    }
                }
                Ok(GetKycStatusResponse {
                    status: status__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GetKycStatusResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetPortfolioRiskRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GetPortfolioRiskRequest", len)?;
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetPortfolioRiskRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio_id",
            "portfolioId",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PortfolioId,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetPortfolioRiskRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GetPortfolioRiskRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetPortfolioRiskRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio_id__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetPortfolioRiskRequest {
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GetPortfolioRiskRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetPortfolioRiskResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.metrics.is_some() {
            len += 1;
        }
        if self.found {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GetPortfolioRiskResponse", len)?;
        if let Some(v) = self.metrics.as_ref() {
            struct_ser.serialize_field("metrics", v)?;
        }
        if self.found {
            struct_ser.serialize_field("found", &self.found)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetPortfolioRiskResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "metrics",
            "found",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Metrics,
            Found,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "metrics" => Ok(GeneratedField::Metrics),
                            "found" => Ok(GeneratedField::Found),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetPortfolioRiskResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GetPortfolioRiskResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetPortfolioRiskResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut metrics__ = None;
                let mut found__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Metrics => {
                            if metrics__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metrics"));
                            }
                            metrics__ = map_.next_value()?;
                        }
                        GeneratedField::Found => {
                            if found__.is_some() {
                                return Err(serde::de::Error::duplicate_field("found"));
                            }
                            found__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetPortfolioRiskResponse {
                    metrics: metrics__,
                    found: found__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GetPortfolioRiskResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetRiskHistoryRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if !self.start_time.is_empty() {
            len += 1;
        }
        if !self.end_time.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GetRiskHistoryRequest", len)?;
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if !self.start_time.is_empty() {
            struct_ser.serialize_field("startTime", &self.start_time)?;
        }
        if !self.end_time.is_empty() {
            struct_ser.serialize_field("endTime", &self.end_time)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetRiskHistoryRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio_id",
            "portfolioId",
            "start_time",
            "startTime",
            "end_time",
            "endTime",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PortfolioId,
            StartTime,
            EndTime,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "startTime" | "start_time" => Ok(GeneratedField::StartTime),
                            "endTime" | "end_time" => Ok(GeneratedField::EndTime),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetRiskHistoryRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GetRiskHistoryRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetRiskHistoryRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio_id__ = None;
                let mut start_time__ = None;
                let mut end_time__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::StartTime => {
                            if start_time__.is_some() {
                                return Err(serde::de::Error::duplicate_field("startTime"));
                            }
                            start_time__ = Some(map_.next_value()?);
                        }
                        GeneratedField::EndTime => {
                            if end_time__.is_some() {
                                return Err(serde::de::Error::duplicate_field("endTime"));
                            }
                            end_time__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetRiskHistoryRequest {
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    start_time: start_time__.unwrap_or_default(),
                    end_time: end_time__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GetRiskHistoryRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetRiskHistoryResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.points.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GetRiskHistoryResponse", len)?;
        if !self.points.is_empty() {
            struct_ser.serialize_field("points", &self.points)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetRiskHistoryResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "points",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Points,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "points" => Ok(GeneratedField::Points),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetRiskHistoryResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GetRiskHistoryResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetRiskHistoryResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut points__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Points => {
                            if points__.is_some() {
                                return Err(serde::de::Error::duplicate_field("points"));
                            }
                            points__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetRiskHistoryResponse {
                    points: points__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GetRiskHistoryResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetRiskLimitsRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.account_id.is_empty() {
            len += 1;
        }
        if self.include_utilization {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GetRiskLimitsRequest", len)?;
        if !self.account_id.is_empty() {
            struct_ser.serialize_field("accountId", &self.account_id)?;
        }
        if self.include_utilization {
            struct_ser.serialize_field("includeUtilization", &self.include_utilization)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetRiskLimitsRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "account_id",
            "accountId",
            "include_utilization",
            "includeUtilization",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            AccountId,
            IncludeUtilization,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "accountId" | "account_id" => Ok(GeneratedField::AccountId),
                            "includeUtilization" | "include_utilization" => Ok(GeneratedField::IncludeUtilization),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetRiskLimitsRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GetRiskLimitsRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetRiskLimitsRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut account_id__ = None;
                let mut include_utilization__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::AccountId => {
                            if account_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("accountId"));
                            }
                            account_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IncludeUtilization => {
                            if include_utilization__.is_some() {
                                return Err(serde::de::Error::duplicate_field("includeUtilization"));
                            }
                            include_utilization__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetRiskLimitsRequest {
                    account_id: account_id__.unwrap_or_default(),
                    include_utilization: include_utilization__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GetRiskLimitsRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetRiskLimitsResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.limits.is_empty() {
            len += 1;
        }
        if !self.utilizations.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GetRiskLimitsResponse", len)?;
        if !self.limits.is_empty() {
            struct_ser.serialize_field("limits", &self.limits)?;
        }
        if !self.utilizations.is_empty() {
            struct_ser.serialize_field("utilizations", &self.utilizations)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetRiskLimitsResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "limits",
            "utilizations",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Limits,
            Utilizations,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "limits" => Ok(GeneratedField::Limits),
                            "utilizations" => Ok(GeneratedField::Utilizations),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetRiskLimitsResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GetRiskLimitsResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetRiskLimitsResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut limits__ = None;
                let mut utilizations__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Limits => {
                            if limits__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limits"));
                            }
                            limits__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Utilizations => {
                            if utilizations__.is_some() {
                                return Err(serde::de::Error::duplicate_field("utilizations"));
                            }
                            utilizations__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetRiskLimitsResponse {
                    limits: limits__.unwrap_or_default(),
                    utilizations: utilizations__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GetRiskLimitsResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GreeksExposure {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.delta != 0. {
            len += 1;
        }
        if self.gamma != 0. {
            len += 1;
        }
        if self.vega != 0. {
            len += 1;
        }
        if self.theta != 0. {
            len += 1;
        }
        if self.rho != 0. {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.GreeksExposure", len)?;
        if self.delta != 0. {
            struct_ser.serialize_field("delta", &self.delta)?;
        }
        if self.gamma != 0. {
            struct_ser.serialize_field("gamma", &self.gamma)?;
        }
        if self.vega != 0. {
            struct_ser.serialize_field("vega", &self.vega)?;
        }
        if self.theta != 0. {
            struct_ser.serialize_field("theta", &self.theta)?;
        }
        if self.rho != 0. {
            struct_ser.serialize_field("rho", &self.rho)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GreeksExposure {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "delta",
            "gamma",
            "vega",
            "theta",
            "rho",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Delta,
            Gamma,
            Vega,
            Theta,
            Rho,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "delta" => Ok(GeneratedField::Delta),
                            "gamma" => Ok(GeneratedField::Gamma),
                            "vega" => Ok(GeneratedField::Vega),
                            "theta" => Ok(GeneratedField::Theta),
                            "rho" => Ok(GeneratedField::Rho),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GreeksExposure;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.GreeksExposure")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GreeksExposure, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut delta__ = None;
                let mut gamma__ = None;
                let mut vega__ = None;
                let mut theta__ = None;
                let mut rho__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Delta => {
                            if delta__.is_some() {
                                return Err(serde::de::Error::duplicate_field("delta"));
                            }
                            delta__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Gamma => {
                            if gamma__.is_some() {
                                return Err(serde::de::Error::duplicate_field("gamma"));
                            }
                            gamma__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Vega => {
                            if vega__.is_some() {
                                return Err(serde::de::Error::duplicate_field("vega"));
                            }
                            vega__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Theta => {
                            if theta__.is_some() {
                                return Err(serde::de::Error::duplicate_field("theta"));
                            }
                            theta__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Rho => {
                            if rho__.is_some() {
                                return Err(serde::de::Error::duplicate_field("rho"));
                            }
                            rho__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(GreeksExposure {
                    delta: delta__.unwrap_or_default(),
                    gamma: gamma__.unwrap_or_default(),
                    vega: vega__.unwrap_or_default(),
                    theta: theta__.unwrap_or_default(),
                    rho: rho__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.GreeksExposure", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for KycStatus {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.user_id.is_empty() {
            len += 1;
        }
        if self.verified {
            len += 1;
        }
        if self.level != 0 {
            len += 1;
        }
        if !self.documents.is_empty() {
            len += 1;
        }
        if !self.verified_at.is_empty() {
            len += 1;
        }
        if !self.expires_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.KycStatus", len)?;
        if !self.user_id.is_empty() {
            struct_ser.serialize_field("userId", &self.user_id)?;
        }
        if self.verified {
            struct_ser.serialize_field("verified", &self.verified)?;
        }
        if self.level != 0 {
            struct_ser.serialize_field("level", &self.level)?;
        }
        if !self.documents.is_empty() {
            struct_ser.serialize_field("documents", &self.documents)?;
        }
        if !self.verified_at.is_empty() {
            struct_ser.serialize_field("verifiedAt", &self.verified_at)?;
        }
        if !self.expires_at.is_empty() {
            struct_ser.serialize_field("expiresAt", &self.expires_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for KycStatus {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "user_id",
            "userId",
            "verified",
            "level",
            "documents",
            "verified_at",
            "verifiedAt",
            "expires_at",
            "expiresAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            UserId,
            Verified,
            Level,
            Documents,
            VerifiedAt,
            ExpiresAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "userId" | "user_id" => Ok(GeneratedField::UserId),
                            "verified" => Ok(GeneratedField::Verified),
                            "level" => Ok(GeneratedField::Level),
                            "documents" => Ok(GeneratedField::Documents),
                            "verifiedAt" | "verified_at" => Ok(GeneratedField::VerifiedAt),
                            "expiresAt" | "expires_at" => Ok(GeneratedField::ExpiresAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = KycStatus;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.KycStatus")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<KycStatus, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut user_id__ = None;
                let mut verified__ = None;
                let mut level__ = None;
                let mut documents__ = None;
                let mut verified_at__ = None;
                let mut expires_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::UserId => {
                            if user_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("userId"));
                            }
                            user_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Verified => {
                            if verified__.is_some() {
                                return Err(serde::de::Error::duplicate_field("verified"));
                            }
                            verified__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Level => {
                            if level__.is_some() {
                                return Err(serde::de::Error::duplicate_field("level"));
                            }
                            level__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Documents => {
                            if documents__.is_some() {
                                return Err(serde::de::Error::duplicate_field("documents"));
                            }
                            documents__ = Some(map_.next_value()?);
                        }
                        GeneratedField::VerifiedAt => {
                            if verified_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("verifiedAt"));
                            }
                            verified_at__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ExpiresAt => {
                            if expires_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("expiresAt"));
                            }
                            expires_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(KycStatus {
                    user_id: user_id__.unwrap_or_default(),
                    verified: verified__.unwrap_or_default(),
                    level: level__.unwrap_or_default(),
                    documents: documents__.unwrap_or_default(),
                    verified_at: verified_at__.unwrap_or_default(),
                    expires_at: expires_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.KycStatus", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for LimitBreach {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.breach_id.is_empty() {
            len += 1;
        }
        if self.limit.is_some() {
            len += 1;
        }
        if self.observed_value != 0. {
            len += 1;
        }
        if self.severity != 0 {
            len += 1;
        }
        if !self.breached_at.is_empty() {
            len += 1;
        }
        if self.resolved {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.LimitBreach", len)?;
        if !self.breach_id.is_empty() {
            struct_ser.serialize_field("breachId", &self.breach_id)?;
        }
        if let Some(v) = self.limit.as_ref() {
            struct_ser.serialize_field("limit", v)?;
        }
        if self.observed_value != 0. {
            struct_ser.serialize_field("observedValue", &self.observed_value)?;
        }
        if self.severity != 0 {
            let v = AlertSeverity::try_from(self.severity)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.severity)))?;
            struct_ser.serialize_field("severity", &v)?;
        }
        if !self.breached_at.is_empty() {
            struct_ser.serialize_field("breachedAt", &self.breached_at)?;
        }
        if self.resolved {
            struct_ser.serialize_field("resolved", &self.resolved)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for LimitBreach {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "breach_id",
            "breachId",
            "limit",
            "observed_value",
            "observedValue",
            "severity",
            "breached_at",
            "breachedAt",
            "resolved",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            BreachId,
            Limit,
            ObservedValue,
            Severity,
            BreachedAt,
            Resolved,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "breachId" | "breach_id" => Ok(GeneratedField::BreachId),
                            "limit" => Ok(GeneratedField::Limit),
                            "observedValue" | "observed_value" => Ok(GeneratedField::ObservedValue),
                            "severity" => Ok(GeneratedField::Severity),
                            "breachedAt" | "breached_at" => Ok(GeneratedField::BreachedAt),
                            "resolved" => Ok(GeneratedField::Resolved),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = LimitBreach;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.LimitBreach")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<LimitBreach, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut breach_id__ = None;
                let mut limit__ = None;
                let mut observed_value__ = None;
                let mut severity__ = None;
                let mut breached_at__ = None;
                let mut resolved__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::BreachId => {
                            if breach_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("breachId"));
                            }
                            breach_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Limit => {
                            if limit__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limit"));
                            }
                            limit__ = map_.next_value()?;
                        }
                        GeneratedField::ObservedValue => {
                            if observed_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("observedValue"));
                            }
                            observed_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Severity => {
                            if severity__.is_some() {
                                return Err(serde::de::Error::duplicate_field("severity"));
                            }
                            severity__ = Some(map_.next_value::<AlertSeverity>()? as i32);
                        }
                        GeneratedField::BreachedAt => {
                            if breached_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("breachedAt"));
                            }
                            breached_at__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Resolved => {
                            if resolved__.is_some() {
                                return Err(serde::de::Error::duplicate_field("resolved"));
                            }
                            resolved__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(LimitBreach {
                    breach_id: breach_id__.unwrap_or_default(),
                    limit: limit__,
                    observed_value: observed_value__.unwrap_or_default(),
                    severity: severity__.unwrap_or_default(),
                    breached_at: breached_at__.unwrap_or_default(),
                    resolved: resolved__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.LimitBreach", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for LimitType {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "LIMIT_TYPE_UNSPECIFIED",
            Self::Position => "LIMIT_TYPE_POSITION",
            Self::Sector => "LIMIT_TYPE_SECTOR",
            Self::Leverage => "LIMIT_TYPE_LEVERAGE",
            Self::Var => "LIMIT_TYPE_VAR",
            Self::Drawdown => "LIMIT_TYPE_DRAWDOWN",
            Self::Notional => "LIMIT_TYPE_NOTIONAL",
            Self::Liquidity => "LIMIT_TYPE_LIQUIDITY",
            Self::DailyLoss => "LIMIT_TYPE_DAILY_LOSS",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for LimitType {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "LIMIT_TYPE_UNSPECIFIED",
            "LIMIT_TYPE_POSITION",
            "LIMIT_TYPE_SECTOR",
            "LIMIT_TYPE_LEVERAGE",
            "LIMIT_TYPE_VAR",
            "LIMIT_TYPE_DRAWDOWN",
            "LIMIT_TYPE_NOTIONAL",
            "LIMIT_TYPE_LIQUIDITY",
            "LIMIT_TYPE_DAILY_LOSS",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = LimitType;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "LIMIT_TYPE_UNSPECIFIED" => Ok(LimitType::Unspecified),
                    "LIMIT_TYPE_POSITION" => Ok(LimitType::Position),
                    "LIMIT_TYPE_SECTOR" => Ok(LimitType::Sector),
                    "LIMIT_TYPE_LEVERAGE" => Ok(LimitType::Leverage),
                    "LIMIT_TYPE_VAR" => Ok(LimitType::Var),
                    "LIMIT_TYPE_DRAWDOWN" => Ok(LimitType::Drawdown),
                    "LIMIT_TYPE_NOTIONAL" => Ok(LimitType::Notional),
                    "LIMIT_TYPE_LIQUIDITY" => Ok(LimitType::Liquidity),
                    "LIMIT_TYPE_DAILY_LOSS" => Ok(LimitType::DailyLoss),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for LimitUtilization {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.limit.is_some() {
            len += 1;
        }
        if self.current_value != 0. {
            len += 1;
        }
        if self.utilization_percent != 0. {
            len += 1;
        }
        if self.breached {
            len += 1;
        }
        if self.warning {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.LimitUtilization", len)?;
        if let Some(v) = self.limit.as_ref() {
            struct_ser.serialize_field("limit", v)?;
        }
        if self.current_value != 0. {
            struct_ser.serialize_field("currentValue", &self.current_value)?;
        }
        if self.utilization_percent != 0. {
            struct_ser.serialize_field("utilizationPercent", &self.utilization_percent)?;
        }
        if self.breached {
            struct_ser.serialize_field("breached", &self.breached)?;
        }
        if self.warning {
            struct_ser.serialize_field("warning", &self.warning)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for LimitUtilization {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "limit",
            "current_value",
            "currentValue",
            "utilization_percent",
            "utilizationPercent",
            "breached",
            "warning",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Limit,
            CurrentValue,
            UtilizationPercent,
            Breached,
            Warning,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "limit" => Ok(GeneratedField::Limit),
                            "currentValue" | "current_value" => Ok(GeneratedField::CurrentValue),
                            "utilizationPercent" | "utilization_percent" => Ok(GeneratedField::UtilizationPercent),
                            "breached" => Ok(GeneratedField::Breached),
                            "warning" => Ok(GeneratedField::Warning),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = LimitUtilization;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.LimitUtilization")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<LimitUtilization, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut limit__ = None;
                let mut current_value__ = None;
                let mut utilization_percent__ = None;
                let mut breached__ = None;
                let mut warning__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Limit => {
                            if limit__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limit"));
                            }
                            limit__ = map_.next_value()?;
                        }
                        GeneratedField::CurrentValue => {
                            if current_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("currentValue"));
                            }
                            current_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::UtilizationPercent => {
                            if utilization_percent__.is_some() {
                                return Err(serde::de::Error::duplicate_field("utilizationPercent"));
                            }
                            utilization_percent__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Breached => {
                            if breached__.is_some() {
                                return Err(serde::de::Error::duplicate_field("breached"));
                            }
                            breached__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Warning => {
                            if warning__.is_some() {
                                return Err(serde::de::Error::duplicate_field("warning"));
                            }
                            warning__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(LimitUtilization {
                    limit: limit__,
                    current_value: current_value__.unwrap_or_default(),
                    utilization_percent: utilization_percent__.unwrap_or_default(),
                    breached: breached__.unwrap_or_default(),
                    warning: warning__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.LimitUtilization", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for LiquidityMetrics {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.liquidity_ratio != 0. {
            len += 1;
        }
        if self.days_to_liquidate != 0. {
            len += 1;
        }
        if self.cash_ratio != 0. {
            len += 1;
        }
        if self.bid_ask_spread_cost != 0. {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.LiquidityMetrics", len)?;
        if self.liquidity_ratio != 0. {
            struct_ser.serialize_field("liquidityRatio", &self.liquidity_ratio)?;
        }
        if self.days_to_liquidate != 0. {
            struct_ser.serialize_field("daysToLiquidate", &self.days_to_liquidate)?;
        }
        if self.cash_ratio != 0. {
            struct_ser.serialize_field("cashRatio", &self.cash_ratio)?;
        }
        if self.bid_ask_spread_cost != 0. {
            struct_ser.serialize_field("bidAskSpreadCost", &self.bid_ask_spread_cost)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for LiquidityMetrics {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "liquidity_ratio",
            "liquidityRatio",
            "days_to_liquidate",
            "daysToLiquidate",
            "cash_ratio",
            "cashRatio",
            "bid_ask_spread_cost",
            "bidAskSpreadCost",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            LiquidityRatio,
            DaysToLiquidate,
            CashRatio,
            BidAskSpreadCost,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "liquidityRatio" | "liquidity_ratio" => Ok(GeneratedField::LiquidityRatio),
                            "daysToLiquidate" | "days_to_liquidate" => Ok(GeneratedField::DaysToLiquidate),
                            "cashRatio" | "cash_ratio" => Ok(GeneratedField::CashRatio),
                            "bidAskSpreadCost" | "bid_ask_spread_cost" => Ok(GeneratedField::BidAskSpreadCost),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = LiquidityMetrics;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.LiquidityMetrics")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<LiquidityMetrics, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut liquidity_ratio__ = None;
                let mut days_to_liquidate__ = None;
                let mut cash_ratio__ = None;
                let mut bid_ask_spread_cost__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::LiquidityRatio => {
                            if liquidity_ratio__.is_some() {
                                return Err(serde::de::Error::duplicate_field("liquidityRatio"));
                            }
                            liquidity_ratio__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::DaysToLiquidate => {
                            if days_to_liquidate__.is_some() {
                                return Err(serde::de::Error::duplicate_field("daysToLiquidate"));
                            }
                            days_to_liquidate__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::CashRatio => {
                            if cash_ratio__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cashRatio"));
                            }
                            cash_ratio__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::BidAskSpreadCost => {
                            if bid_ask_spread_cost__.is_some() {
                                return Err(serde::de::Error::duplicate_field("bidAskSpreadCost"));
                            }
                            bid_ask_spread_cost__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(LiquidityMetrics {
                    liquidity_ratio: liquidity_ratio__.unwrap_or_default(),
                    days_to_liquidate: days_to_liquidate__.unwrap_or_default(),
                    cash_ratio: cash_ratio__.unwrap_or_default(),
                    bid_ask_spread_cost: bid_ask_spread_cost__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.LiquidityMetrics", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ListComplianceRulesRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.jurisdiction.is_empty() {
            len += 1;
        }
        if self.category != 0 {
            len += 1;
        }
        if self.enabled_only {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ListComplianceRulesRequest", len)?;
        if !self.jurisdiction.is_empty() {
            struct_ser.serialize_field("jurisdiction", &self.jurisdiction)?;
        }
        if self.category != 0 {
            let v = RiskCategory::try_from(self.category)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.category)))?;
            struct_ser.serialize_field("category", &v)?;
        }
        if self.enabled_only {
            struct_ser.serialize_field("enabledOnly", &self.enabled_only)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ListComplianceRulesRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "jurisdiction",
            "category",
            "enabled_only",
            "enabledOnly",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Jurisdiction,
            Category,
            EnabledOnly,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "jurisdiction" => Ok(GeneratedField::Jurisdiction),
                            "category" => Ok(GeneratedField::Category),
                            "enabledOnly" | "enabled_only" => Ok(GeneratedField::EnabledOnly),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ListComplianceRulesRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ListComplianceRulesRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ListComplianceRulesRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut jurisdiction__ = None;
                let mut category__ = None;
                let mut enabled_only__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Jurisdiction => {
                            if jurisdiction__.is_some() {
                                return Err(serde::de::Error::duplicate_field("jurisdiction"));
                            }
                            jurisdiction__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Category => {
                            if category__.is_some() {
                                return Err(serde::de::Error::duplicate_field("category"));
                            }
                            category__ = Some(map_.next_value::<RiskCategory>()? as i32);
                        }
                        GeneratedField::EnabledOnly => {
                            if enabled_only__.is_some() {
                                return Err(serde::de::Error::duplicate_field("enabledOnly"));
                            }
                            enabled_only__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ListComplianceRulesRequest {
                    jurisdiction: jurisdiction__.unwrap_or_default(),
                    category: category__.unwrap_or_default(),
                    enabled_only: enabled_only__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ListComplianceRulesRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ListComplianceRulesResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.rules.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ListComplianceRulesResponse", len)?;
        if !self.rules.is_empty() {
            struct_ser.serialize_field("rules", &self.rules)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ListComplianceRulesResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "rules",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Rules,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "rules" => Ok(GeneratedField::Rules),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ListComplianceRulesResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ListComplianceRulesResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ListComplianceRulesResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut rules__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Rules => {
                            if rules__.is_some() {
                                return Err(serde::de::Error::duplicate_field("rules"));
                            }
                            rules__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ListComplianceRulesResponse {
                    rules: rules__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ListComplianceRulesResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ListRiskAlertsRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if self.min_severity != 0 {
            len += 1;
        }
        if self.status != 0 {
            len += 1;
        }
        if self.limit != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ListRiskAlertsRequest", len)?;
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if self.min_severity != 0 {
            let v = AlertSeverity::try_from(self.min_severity)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.min_severity)))?;
            struct_ser.serialize_field("minSeverity", &v)?;
        }
        if self.status != 0 {
            let v = AlertStatus::try_from(self.status)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.status)))?;
            struct_ser.serialize_field("status", &v)?;
        }
        if self.limit != 0 {
            struct_ser.serialize_field("limit", &self.limit)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ListRiskAlertsRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio_id",
            "portfolioId",
            "min_severity",
            "minSeverity",
            "status",
            "limit",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PortfolioId,
            MinSeverity,
            Status,
            Limit,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "minSeverity" | "min_severity" => Ok(GeneratedField::MinSeverity),
                            "status" => Ok(GeneratedField::Status),
                            "limit" => Ok(GeneratedField::Limit),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ListRiskAlertsRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ListRiskAlertsRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ListRiskAlertsRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio_id__ = None;
                let mut min_severity__ = None;
                let mut status__ = None;
                let mut limit__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::MinSeverity => {
                            if min_severity__.is_some() {
                                return Err(serde::de::Error::duplicate_field("minSeverity"));
                            }
                            min_severity__ = Some(map_.next_value::<AlertSeverity>()? as i32);
                        }
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = Some(map_.next_value::<AlertStatus>()? as i32);
                        }
                        GeneratedField::Limit => {
                            if limit__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limit"));
                            }
                            limit__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(ListRiskAlertsRequest {
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    min_severity: min_severity__.unwrap_or_default(),
                    status: status__.unwrap_or_default(),
                    limit: limit__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ListRiskAlertsRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ListRiskAlertsResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.alerts.is_empty() {
            len += 1;
        }
        if self.total_count != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ListRiskAlertsResponse", len)?;
        if !self.alerts.is_empty() {
            struct_ser.serialize_field("alerts", &self.alerts)?;
        }
        if self.total_count != 0 {
            struct_ser.serialize_field("totalCount", &self.total_count)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ListRiskAlertsResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "alerts",
            "total_count",
            "totalCount",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Alerts,
            TotalCount,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "alerts" => Ok(GeneratedField::Alerts),
                            "totalCount" | "total_count" => Ok(GeneratedField::TotalCount),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ListRiskAlertsResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ListRiskAlertsResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ListRiskAlertsResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut alerts__ = None;
                let mut total_count__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Alerts => {
                            if alerts__.is_some() {
                                return Err(serde::de::Error::duplicate_field("alerts"));
                            }
                            alerts__ = Some(map_.next_value()?);
                        }
                        GeneratedField::TotalCount => {
                            if total_count__.is_some() {
                                return Err(serde::de::Error::duplicate_field("totalCount"));
                            }
                            total_count__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(ListRiskAlertsResponse {
                    alerts: alerts__.unwrap_or_default(),
                    total_count: total_count__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ListRiskAlertsResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for PerformanceMetrics {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.volatility != 0. {
            len += 1;
        }
        if self.sharpe_ratio != 0. {
            len += 1;
        }
        if self.sortino_ratio != 0. {
            len += 1;
        }
        if self.max_drawdown != 0. {
            len += 1;
        }
        if self.beta != 0. {
            len += 1;
        }
        if self.alpha != 0. {
            len += 1;
        }
        if self.correlation_to_benchmark != 0. {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.PerformanceMetrics", len)?;
        if self.volatility != 0. {
            struct_ser.serialize_field("volatility", &self.volatility)?;
        }
        if self.sharpe_ratio != 0. {
            struct_ser.serialize_field("sharpeRatio", &self.sharpe_ratio)?;
        }
        if self.sortino_ratio != 0. {
            struct_ser.serialize_field("sortinoRatio", &self.sortino_ratio)?;
        }
        if self.max_drawdown != 0. {
            struct_ser.serialize_field("maxDrawdown", &self.max_drawdown)?;
        }
        if self.beta != 0. {
            struct_ser.serialize_field("beta", &self.beta)?;
        }
        if self.alpha != 0. {
            struct_ser.serialize_field("alpha", &self.alpha)?;
        }
        if self.correlation_to_benchmark != 0. {
            struct_ser.serialize_field("correlationToBenchmark", &self.correlation_to_benchmark)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for PerformanceMetrics {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "volatility",
            "sharpe_ratio",
            "sharpeRatio",
            "sortino_ratio",
            "sortinoRatio",
            "max_drawdown",
            "maxDrawdown",
            "beta",
            "alpha",
            "correlation_to_benchmark",
            "correlationToBenchmark",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Volatility,
            SharpeRatio,
            SortinoRatio,
            MaxDrawdown,
            Beta,
            Alpha,
            CorrelationToBenchmark,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "volatility" => Ok(GeneratedField::Volatility),
                            "sharpeRatio" | "sharpe_ratio" => Ok(GeneratedField::SharpeRatio),
                            "sortinoRatio" | "sortino_ratio" => Ok(GeneratedField::SortinoRatio),
                            "maxDrawdown" | "max_drawdown" => Ok(GeneratedField::MaxDrawdown),
                            "beta" => Ok(GeneratedField::Beta),
                            "alpha" => Ok(GeneratedField::Alpha),
                            "correlationToBenchmark" | "correlation_to_benchmark" => Ok(GeneratedField::CorrelationToBenchmark),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = PerformanceMetrics;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.PerformanceMetrics")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<PerformanceMetrics, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut volatility__ = None;
                let mut sharpe_ratio__ = None;
                let mut sortino_ratio__ = None;
                let mut max_drawdown__ = None;
                let mut beta__ = None;
                let mut alpha__ = None;
                let mut correlation_to_benchmark__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Volatility => {
                            if volatility__.is_some() {
                                return Err(serde::de::Error::duplicate_field("volatility"));
                            }
                            volatility__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::SharpeRatio => {
                            if sharpe_ratio__.is_some() {
                                return Err(serde::de::Error::duplicate_field("sharpeRatio"));
                            }
                            sharpe_ratio__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::SortinoRatio => {
                            if sortino_ratio__.is_some() {
                                return Err(serde::de::Error::duplicate_field("sortinoRatio"));
                            }
                            sortino_ratio__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::MaxDrawdown => {
                            if max_drawdown__.is_some() {
                                return Err(serde::de::Error::duplicate_field("maxDrawdown"));
                            }
                            max_drawdown__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Beta => {
                            if beta__.is_some() {
                                return Err(serde::de::Error::duplicate_field("beta"));
                            }
                            beta__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Alpha => {
                            if alpha__.is_some() {
                                return Err(serde::de::Error::duplicate_field("alpha"));
                            }
                            alpha__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::CorrelationToBenchmark => {
                            if correlation_to_benchmark__.is_some() {
                                return Err(serde::de::Error::duplicate_field("correlationToBenchmark"));
                            }
                            correlation_to_benchmark__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(PerformanceMetrics {
                    volatility: volatility__.unwrap_or_default(),
                    sharpe_ratio: sharpe_ratio__.unwrap_or_default(),
                    sortino_ratio: sortino_ratio__.unwrap_or_default(),
                    max_drawdown: max_drawdown__.unwrap_or_default(),
                    beta: beta__.unwrap_or_default(),
                    alpha: alpha__.unwrap_or_default(),
                    correlation_to_benchmark: correlation_to_benchmark__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.PerformanceMetrics", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for Portfolio {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if !self.account_id.is_empty() {
            len += 1;
        }
        if !self.positions.is_empty() {
            len += 1;
        }
        if self.cash_balance != 0. {
            len += 1;
        }
        if self.total_value != 0. {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if !self.as_of.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.Portfolio", len)?;
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if !self.account_id.is_empty() {
            struct_ser.serialize_field("accountId", &self.account_id)?;
        }
        if !self.positions.is_empty() {
            struct_ser.serialize_field("positions", &self.positions)?;
        }
        if self.cash_balance != 0. {
            struct_ser.serialize_field("cashBalance", &self.cash_balance)?;
        }
        if self.total_value != 0. {
            struct_ser.serialize_field("totalValue", &self.total_value)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if !self.as_of.is_empty() {
            struct_ser.serialize_field("asOf", &self.as_of)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for Portfolio {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio_id",
            "portfolioId",
            "account_id",
            "accountId",
            "positions",
            "cash_balance",
            "cashBalance",
            "total_value",
            "totalValue",
            "currency",
            "as_of",
            "asOf",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PortfolioId,
            AccountId,
            Positions,
            CashBalance,
            TotalValue,
            Currency,
            AsOf,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "accountId" | "account_id" => Ok(GeneratedField::AccountId),
                            "positions" => Ok(GeneratedField::Positions),
                            "cashBalance" | "cash_balance" => Ok(GeneratedField::CashBalance),
                            "totalValue" | "total_value" => Ok(GeneratedField::TotalValue),
                            "currency" => Ok(GeneratedField::Currency),
                            "asOf" | "as_of" => Ok(GeneratedField::AsOf),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = Portfolio;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.Portfolio")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<Portfolio, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio_id__ = None;
                let mut account_id__ = None;
                let mut positions__ = None;
                let mut cash_balance__ = None;
                let mut total_value__ = None;
                let mut currency__ = None;
                let mut as_of__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AccountId => {
                            if account_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("accountId"));
                            }
                            account_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Positions => {
                            if positions__.is_some() {
                                return Err(serde::de::Error::duplicate_field("positions"));
                            }
                            positions__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CashBalance => {
                            if cash_balance__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cashBalance"));
                            }
                            cash_balance__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::TotalValue => {
                            if total_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("totalValue"));
                            }
                            total_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Currency => {
                            if currency__.is_some() {
                                return Err(serde::de::Error::duplicate_field("currency"));
                            }
                            currency__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AsOf => {
                            if as_of__.is_some() {
                                return Err(serde::de::Error::duplicate_field("asOf"));
                            }
                            as_of__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(Portfolio {
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    account_id: account_id__.unwrap_or_default(),
                    positions: positions__.unwrap_or_default(),
                    cash_balance: cash_balance__.unwrap_or_default(),
                    total_value: total_value__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    as_of: as_of__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.Portfolio", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for PortfolioRiskMetrics {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if self.value_at_risk.is_some() {
            len += 1;
        }
        if self.expected_shortfall.is_some() {
            len += 1;
        }
        if self.performance.is_some() {
            len += 1;
        }
        if self.greeks.is_some() {
            len += 1;
        }
        if self.concentration.is_some() {
            len += 1;
        }
        if !self.category_scores.is_empty() {
            len += 1;
        }
        if self.overall_risk_score != 0. {
            len += 1;
        }
        if self.overall_risk_level != 0 {
            len += 1;
        }
        if self.leverage != 0. {
            len += 1;
        }
        if !self.calculated_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.PortfolioRiskMetrics", len)?;
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if let Some(v) = self.value_at_risk.as_ref() {
            struct_ser.serialize_field("valueAtRisk", v)?;
        }
        if let Some(v) = self.expected_shortfall.as_ref() {
            struct_ser.serialize_field("expectedShortfall", v)?;
        }
        if let Some(v) = self.performance.as_ref() {
            struct_ser.serialize_field("performance", v)?;
        }
        if let Some(v) = self.greeks.as_ref() {
            struct_ser.serialize_field("greeks", v)?;
        }
        if let Some(v) = self.concentration.as_ref() {
            struct_ser.serialize_field("concentration", v)?;
        }
        if !self.category_scores.is_empty() {
            struct_ser.serialize_field("categoryScores", &self.category_scores)?;
        }
        if self.overall_risk_score != 0. {
            struct_ser.serialize_field("overallRiskScore", &self.overall_risk_score)?;
        }
        if self.overall_risk_level != 0 {
            let v = RiskLevel::try_from(self.overall_risk_level)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.overall_risk_level)))?;
            struct_ser.serialize_field("overallRiskLevel", &v)?;
        }
        if self.leverage != 0. {
            struct_ser.serialize_field("leverage", &self.leverage)?;
        }
        if !self.calculated_at.is_empty() {
            struct_ser.serialize_field("calculatedAt", &self.calculated_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for PortfolioRiskMetrics {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio_id",
            "portfolioId",
            "value_at_risk",
            "valueAtRisk",
            "expected_shortfall",
            "expectedShortfall",
            "performance",
            "greeks",
            "concentration",
            "category_scores",
            "categoryScores",
            "overall_risk_score",
            "overallRiskScore",
            "overall_risk_level",
            "overallRiskLevel",
            "leverage",
            "calculated_at",
            "calculatedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PortfolioId,
            ValueAtRisk,
            ExpectedShortfall,
            Performance,
            Greeks,
            Concentration,
            CategoryScores,
            OverallRiskScore,
            OverallRiskLevel,
            Leverage,
            CalculatedAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "valueAtRisk" | "value_at_risk" => Ok(GeneratedField::ValueAtRisk),
                            "expectedShortfall" | "expected_shortfall" => Ok(GeneratedField::ExpectedShortfall),
                            "performance" => Ok(GeneratedField::Performance),
                            "greeks" => Ok(GeneratedField::Greeks),
                            "concentration" => Ok(GeneratedField::Concentration),
                            "categoryScores" | "category_scores" => Ok(GeneratedField::CategoryScores),
                            "overallRiskScore" | "overall_risk_score" => Ok(GeneratedField::OverallRiskScore),
                            "overallRiskLevel" | "overall_risk_level" => Ok(GeneratedField::OverallRiskLevel),
                            "leverage" => Ok(GeneratedField::Leverage),
                            "calculatedAt" | "calculated_at" => Ok(GeneratedField::CalculatedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = PortfolioRiskMetrics;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.PortfolioRiskMetrics")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<PortfolioRiskMetrics, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio_id__ = None;
                let mut value_at_risk__ = None;
                let mut expected_shortfall__ = None;
                let mut performance__ = None;
                let mut greeks__ = None;
                let mut concentration__ = None;
                let mut category_scores__ = None;
                let mut overall_risk_score__ = None;
                let mut overall_risk_level__ = None;
                let mut leverage__ = None;
                let mut calculated_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ValueAtRisk => {
                            if value_at_risk__.is_some() {
                                return Err(serde::de::Error::duplicate_field("valueAtRisk"));
                            }
                            value_at_risk__ = map_.next_value()?;
                        }
                        GeneratedField::ExpectedShortfall => {
                            if expected_shortfall__.is_some() {
                                return Err(serde::de::Error::duplicate_field("expectedShortfall"));
                            }
                            expected_shortfall__ = map_.next_value()?;
                        }
                        GeneratedField::Performance => {
                            if performance__.is_some() {
                                return Err(serde::de::Error::duplicate_field("performance"));
                            }
                            performance__ = map_.next_value()?;
                        }
                        GeneratedField::Greeks => {
                            if greeks__.is_some() {
                                return Err(serde::de::Error::duplicate_field("greeks"));
                            }
                            greeks__ = map_.next_value()?;
                        }
                        GeneratedField::Concentration => {
                            if concentration__.is_some() {
                                return Err(serde::de::Error::duplicate_field("concentration"));
                            }
                            concentration__ = map_.next_value()?;
                        }
                        GeneratedField::CategoryScores => {
                            if category_scores__.is_some() {
                                return Err(serde::de::Error::duplicate_field("categoryScores"));
                            }
                            category_scores__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, ::pbjson::private::NumberDeserialize<f64>>>()?
                                    .into_iter().map(|(k,v)| (k, v.0)).collect()
                            );
                        }
                        GeneratedField::OverallRiskScore => {
                            if overall_risk_score__.is_some() {
                                return Err(serde::de::Error::duplicate_field("overallRiskScore"));
                            }
                            overall_risk_score__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::OverallRiskLevel => {
                            if overall_risk_level__.is_some() {
                                return Err(serde::de::Error::duplicate_field("overallRiskLevel"));
                            }
                            overall_risk_level__ = Some(map_.next_value::<RiskLevel>()? as i32);
                        }
                        GeneratedField::Leverage => {
                            if leverage__.is_some() {
                                return Err(serde::de::Error::duplicate_field("leverage"));
                            }
                            leverage__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::CalculatedAt => {
                            if calculated_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("calculatedAt"));
                            }
                            calculated_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(PortfolioRiskMetrics {
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    value_at_risk: value_at_risk__,
                    expected_shortfall: expected_shortfall__,
                    performance: performance__,
                    greeks: greeks__,
                    concentration: concentration__,
                    category_scores: category_scores__.unwrap_or_default(),
                    overall_risk_score: overall_risk_score__.unwrap_or_default(),
                    overall_risk_level: overall_risk_level__.unwrap_or_default(),
                    leverage: leverage__.unwrap_or_default(),
                    calculated_at: calculated_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.PortfolioRiskMetrics", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for Position {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.symbol.is_empty() {
            len += 1;
        }
        if self.quantity != 0. {
            len += 1;
        }
        if self.market_value != 0. {
            len += 1;
        }
        if self.weight != 0. {
            len += 1;
        }
        if !self.sector.is_empty() {
            len += 1;
        }
        if !self.asset_class.is_empty() {
            len += 1;
        }
        if self.beta != 0. {
            len += 1;
        }
        if self.unrealized_pnl != 0. {
            len += 1;
        }
        if self.average_cost != 0. {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.Position", len)?;
        if !self.symbol.is_empty() {
            struct_ser.serialize_field("symbol", &self.symbol)?;
        }
        if self.quantity != 0. {
            struct_ser.serialize_field("quantity", &self.quantity)?;
        }
        if self.market_value != 0. {
            struct_ser.serialize_field("marketValue", &self.market_value)?;
        }
        if self.weight != 0. {
            struct_ser.serialize_field("weight", &self.weight)?;
        }
        if !self.sector.is_empty() {
            struct_ser.serialize_field("sector", &self.sector)?;
        }
        if !self.asset_class.is_empty() {
            struct_ser.serialize_field("assetClass", &self.asset_class)?;
        }
        if self.beta != 0. {
            struct_ser.serialize_field("beta", &self.beta)?;
        }
        if self.unrealized_pnl != 0. {
            struct_ser.serialize_field("unrealizedPnl", &self.unrealized_pnl)?;
        }
        if self.average_cost != 0. {
            struct_ser.serialize_field("averageCost", &self.average_cost)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for Position {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "symbol",
            "quantity",
            "market_value",
            "marketValue",
            "weight",
            "sector",
            "asset_class",
            "assetClass",
            "beta",
            "unrealized_pnl",
            "unrealizedPnl",
            "average_cost",
            "averageCost",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Symbol,
            Quantity,
            MarketValue,
            Weight,
            Sector,
            AssetClass,
            Beta,
            UnrealizedPnl,
            AverageCost,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "symbol" => Ok(GeneratedField::Symbol),
                            "quantity" => Ok(GeneratedField::Quantity),
                            "marketValue" | "market_value" => Ok(GeneratedField::MarketValue),
                            "weight" => Ok(GeneratedField::Weight),
                            "sector" => Ok(GeneratedField::Sector),
                            "assetClass" | "asset_class" => Ok(GeneratedField::AssetClass),
                            "beta" => Ok(GeneratedField::Beta),
                            "unrealizedPnl" | "unrealized_pnl" => Ok(GeneratedField::UnrealizedPnl),
                            "averageCost" | "average_cost" => Ok(GeneratedField::AverageCost),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = Position;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.Position")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<Position, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut symbol__ = None;
                let mut quantity__ = None;
                let mut market_value__ = None;
                let mut weight__ = None;
                let mut sector__ = None;
                let mut asset_class__ = None;
                let mut beta__ = None;
                let mut unrealized_pnl__ = None;
                let mut average_cost__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Symbol => {
                            if symbol__.is_some() {
                                return Err(serde::de::Error::duplicate_field("symbol"));
                            }
                            symbol__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Quantity => {
                            if quantity__.is_some() {
                                return Err(serde::de::Error::duplicate_field("quantity"));
                            }
                            quantity__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::MarketValue => {
                            if market_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("marketValue"));
                            }
                            market_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Weight => {
                            if weight__.is_some() {
                                return Err(serde::de::Error::duplicate_field("weight"));
                            }
                            weight__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Sector => {
                            if sector__.is_some() {
                                return Err(serde::de::Error::duplicate_field("sector"));
                            }
                            sector__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AssetClass => {
                            if asset_class__.is_some() {
                                return Err(serde::de::Error::duplicate_field("assetClass"));
                            }
                            asset_class__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Beta => {
                            if beta__.is_some() {
                                return Err(serde::de::Error::duplicate_field("beta"));
                            }
                            beta__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::UnrealizedPnl => {
                            if unrealized_pnl__.is_some() {
                                return Err(serde::de::Error::duplicate_field("unrealizedPnl"));
                            }
                            unrealized_pnl__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::AverageCost => {
                            if average_cost__.is_some() {
                                return Err(serde::de::Error::duplicate_field("averageCost"));
                            }
                            average_cost__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(Position {
                    symbol: symbol__.unwrap_or_default(),
                    quantity: quantity__.unwrap_or_default(),
                    market_value: market_value__.unwrap_or_default(),
                    weight: weight__.unwrap_or_default(),
                    sector: sector__.unwrap_or_default(),
                    asset_class: asset_class__.unwrap_or_default(),
                    beta: beta__.unwrap_or_default(),
                    unrealized_pnl: unrealized_pnl__.unwrap_or_default(),
                    average_cost: average_cost__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.Position", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for PositionImpact {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.symbol.is_empty() {
            len += 1;
        }
        if self.current_value != 0. {
            len += 1;
        }
        if self.stressed_value != 0. {
            len += 1;
        }
        if self.pnl_impact != 0. {
            len += 1;
        }
        if self.impact_percent != 0. {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.PositionImpact", len)?;
        if !self.symbol.is_empty() {
            struct_ser.serialize_field("symbol", &self.symbol)?;
        }
        if self.current_value != 0. {
            struct_ser.serialize_field("currentValue", &self.current_value)?;
        }
        if self.stressed_value != 0. {
            struct_ser.serialize_field("stressedValue", &self.stressed_value)?;
        }
        if self.pnl_impact != 0. {
            struct_ser.serialize_field("pnlImpact", &self.pnl_impact)?;
        }
        if self.impact_percent != 0. {
            struct_ser.serialize_field("impactPercent", &self.impact_percent)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for PositionImpact {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "symbol",
            "current_value",
            "currentValue",
            "stressed_value",
            "stressedValue",
            "pnl_impact",
            "pnlImpact",
            "impact_percent",
            "impactPercent",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Symbol,
            CurrentValue,
            StressedValue,
            PnlImpact,
            ImpactPercent,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "symbol" => Ok(GeneratedField::Symbol),
                            "currentValue" | "current_value" => Ok(GeneratedField::CurrentValue),
                            "stressedValue" | "stressed_value" => Ok(GeneratedField::StressedValue),
                            "pnlImpact" | "pnl_impact" => Ok(GeneratedField::PnlImpact),
                            "impactPercent" | "impact_percent" => Ok(GeneratedField::ImpactPercent),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = PositionImpact;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.PositionImpact")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<PositionImpact, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut symbol__ = None;
                let mut current_value__ = None;
                let mut stressed_value__ = None;
                let mut pnl_impact__ = None;
                let mut impact_percent__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Symbol => {
                            if symbol__.is_some() {
                                return Err(serde::de::Error::duplicate_field("symbol"));
                            }
                            symbol__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CurrentValue => {
                            if current_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("currentValue"));
                            }
                            current_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::StressedValue => {
                            if stressed_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("stressedValue"));
                            }
                            stressed_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::PnlImpact => {
                            if pnl_impact__.is_some() {
                                return Err(serde::de::Error::duplicate_field("pnlImpact"));
                            }
                            pnl_impact__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::ImpactPercent => {
                            if impact_percent__.is_some() {
                                return Err(serde::de::Error::duplicate_field("impactPercent"));
                            }
                            impact_percent__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(PositionImpact {
                    symbol: symbol__.unwrap_or_default(),
                    current_value: current_value__.unwrap_or_default(),
                    stressed_value: stressed_value__.unwrap_or_default(),
                    pnl_impact: pnl_impact__.unwrap_or_default(),
                    impact_percent: impact_percent__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.PositionImpact", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ReportFraudRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.transaction_id.is_empty() {
            len += 1;
        }
        if !self.user_id.is_empty() {
            len += 1;
        }
        if !self.reason.is_empty() {
            len += 1;
        }
        if self.confirmed {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ReportFraudRequest", len)?;
        if !self.transaction_id.is_empty() {
            struct_ser.serialize_field("transactionId", &self.transaction_id)?;
        }
        if !self.user_id.is_empty() {
            struct_ser.serialize_field("userId", &self.user_id)?;
        }
        if !self.reason.is_empty() {
            struct_ser.serialize_field("reason", &self.reason)?;
        }
        if self.confirmed {
            struct_ser.serialize_field("confirmed", &self.confirmed)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ReportFraudRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "transaction_id",
            "transactionId",
            "user_id",
            "userId",
            "reason",
            "confirmed",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            TransactionId,
            UserId,
            Reason,
            Confirmed,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "transactionId" | "transaction_id" => Ok(GeneratedField::TransactionId),
                            "userId" | "user_id" => Ok(GeneratedField::UserId),
                            "reason" => Ok(GeneratedField::Reason),
                            "confirmed" => Ok(GeneratedField::Confirmed),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ReportFraudRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ReportFraudRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ReportFraudRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut transaction_id__ = None;
                let mut user_id__ = None;
                let mut reason__ = None;
                let mut confirmed__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::TransactionId => {
                            if transaction_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("transactionId"));
                            }
                            transaction_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::UserId => {
                            if user_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("userId"));
                            }
                            user_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Reason => {
                            if reason__.is_some() {
                                return Err(serde::de::Error::duplicate_field("reason"));
                            }
                            reason__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Confirmed => {
                            if confirmed__.is_some() {
                                return Err(serde::de::Error::duplicate_field("confirmed"));
                            }
                            confirmed__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ReportFraudRequest {
                    transaction_id: transaction_id__.unwrap_or_default(),
                    user_id: user_id__.unwrap_or_default(),
                    reason: reason__.unwrap_or_default(),
                    confirmed: confirmed__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ReportFraudRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ReportFraudResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.accepted {
            len += 1;
        }
        if !self.case_id.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ReportFraudResponse", len)?;
        if self.accepted {
            struct_ser.serialize_field("accepted", &self.accepted)?;
        }
        if !self.case_id.is_empty() {
            struct_ser.serialize_field("caseId", &self.case_id)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ReportFraudResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "accepted",
            "case_id",
            "caseId",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Accepted,
            CaseId,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "accepted" => Ok(GeneratedField::Accepted),
                            "caseId" | "case_id" => Ok(GeneratedField::CaseId),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ReportFraudResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ReportFraudResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ReportFraudResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut accepted__ = None;
                let mut case_id__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Accepted => {
                            if accepted__.is_some() {
                                return Err(serde::de::Error::duplicate_field("accepted"));
                            }
                            accepted__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CaseId => {
                            if case_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("caseId"));
                            }
                            case_id__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ReportFraudResponse {
                    accepted: accepted__.unwrap_or_default(),
                    case_id: case_id__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ReportFraudResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RiskAlert {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.alert_id.is_empty() {
            len += 1;
        }
        if !self.alert_type.is_empty() {
            len += 1;
        }
        if self.severity != 0 {
            len += 1;
        }
        if self.category != 0 {
            len += 1;
        }
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if !self.message.is_empty() {
            len += 1;
        }
        if !self.metrics.is_empty() {
            len += 1;
        }
        if !self.recommended_action.is_empty() {
            len += 1;
        }
        if self.status != 0 {
            len += 1;
        }
        if !self.created_at.is_empty() {
            len += 1;
        }
        if !self.resolved_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.RiskAlert", len)?;
        if !self.alert_id.is_empty() {
            struct_ser.serialize_field("alertId", &self.alert_id)?;
        }
        if !self.alert_type.is_empty() {
            struct_ser.serialize_field("alertType", &self.alert_type)?;
        }
        if self.severity != 0 {
            let v = AlertSeverity::try_from(self.severity)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.severity)))?;
            struct_ser.serialize_field("severity", &v)?;
        }
        if self.category != 0 {
            let v = RiskCategory::try_from(self.category)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.category)))?;
            struct_ser.serialize_field("category", &v)?;
        }
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if !self.message.is_empty() {
            struct_ser.serialize_field("message", &self.message)?;
        }
        if !self.metrics.is_empty() {
            struct_ser.serialize_field("metrics", &self.metrics)?;
        }
        if !self.recommended_action.is_empty() {
            struct_ser.serialize_field("recommendedAction", &self.recommended_action)?;
        }
        if self.status != 0 {
            let v = AlertStatus::try_from(self.status)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.status)))?;
            struct_ser.serialize_field("status", &v)?;
        }
        if !self.created_at.is_empty() {
            struct_ser.serialize_field("createdAt", &self.created_at)?;
        }
        if !self.resolved_at.is_empty() {
            struct_ser.serialize_field("resolvedAt", &self.resolved_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RiskAlert {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "alert_id",
            "alertId",
            "alert_type",
            "alertType",
            "severity",
            "category",
            "portfolio_id",
            "portfolioId",
            "message",
            "metrics",
            "recommended_action",
            "recommendedAction",
            "status",
            "created_at",
            "createdAt",
            "resolved_at",
            "resolvedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            AlertId,
            AlertType,
            Severity,
            Category,
            PortfolioId,
            Message,
            Metrics,
            RecommendedAction,
            Status,
            CreatedAt,
            ResolvedAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "alertId" | "alert_id" => Ok(GeneratedField::AlertId),
                            "alertType" | "alert_type" => Ok(GeneratedField::AlertType),
                            "severity" => Ok(GeneratedField::Severity),
                            "category" => Ok(GeneratedField::Category),
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "message" => Ok(GeneratedField::Message),
                            "metrics" => Ok(GeneratedField::Metrics),
                            "recommendedAction" | "recommended_action" => Ok(GeneratedField::RecommendedAction),
                            "status" => Ok(GeneratedField::Status),
                            "createdAt" | "created_at" => Ok(GeneratedField::CreatedAt),
                            "resolvedAt" | "resolved_at" => Ok(GeneratedField::ResolvedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RiskAlert;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.RiskAlert")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RiskAlert, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut alert_id__ = None;
                let mut alert_type__ = None;
                let mut severity__ = None;
                let mut category__ = None;
                let mut portfolio_id__ = None;
                let mut message__ = None;
                let mut metrics__ = None;
                let mut recommended_action__ = None;
                let mut status__ = None;
                let mut created_at__ = None;
                let mut resolved_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::AlertId => {
                            if alert_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("alertId"));
                            }
                            alert_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AlertType => {
                            if alert_type__.is_some() {
                                return Err(serde::de::Error::duplicate_field("alertType"));
                            }
                            alert_type__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Severity => {
                            if severity__.is_some() {
                                return Err(serde::de::Error::duplicate_field("severity"));
                            }
                            severity__ = Some(map_.next_value::<AlertSeverity>()? as i32);
                        }
                        GeneratedField::Category => {
                            if category__.is_some() {
                                return Err(serde::de::Error::duplicate_field("category"));
                            }
                            category__ = Some(map_.next_value::<RiskCategory>()? as i32);
                        }
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Message => {
                            if message__.is_some() {
                                return Err(serde::de::Error::duplicate_field("message"));
                            }
                            message__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Metrics => {
                            if metrics__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metrics"));
                            }
                            metrics__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, ::pbjson::private::NumberDeserialize<f64>>>()?
                                    .into_iter().map(|(k,v)| (k, v.0)).collect()
                            );
                        }
                        GeneratedField::RecommendedAction => {
                            if recommended_action__.is_some() {
                                return Err(serde::de::Error::duplicate_field("recommendedAction"));
                            }
                            recommended_action__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = Some(map_.next_value::<AlertStatus>()? as i32);
                        }
                        GeneratedField::CreatedAt => {
                            if created_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("createdAt"));
                            }
                            created_at__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ResolvedAt => {
                            if resolved_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("resolvedAt"));
                            }
                            resolved_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(RiskAlert {
                    alert_id: alert_id__.unwrap_or_default(),
                    alert_type: alert_type__.unwrap_or_default(),
                    severity: severity__.unwrap_or_default(),
                    category: category__.unwrap_or_default(),
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    message: message__.unwrap_or_default(),
                    metrics: metrics__.unwrap_or_default(),
                    recommended_action: recommended_action__.unwrap_or_default(),
                    status: status__.unwrap_or_default(),
                    created_at: created_at__.unwrap_or_default(),
                    resolved_at: resolved_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.RiskAlert", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RiskCategory {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "RISK_CATEGORY_UNSPECIFIED",
            Self::Market => "RISK_CATEGORY_MARKET",
            Self::Credit => "RISK_CATEGORY_CREDIT",
            Self::Liquidity => "RISK_CATEGORY_LIQUIDITY",
            Self::Operational => "RISK_CATEGORY_OPERATIONAL",
            Self::Concentration => "RISK_CATEGORY_CONCENTRATION",
            Self::Regulatory => "RISK_CATEGORY_REGULATORY",
            Self::Systemic => "RISK_CATEGORY_SYSTEMIC",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for RiskCategory {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "RISK_CATEGORY_UNSPECIFIED",
            "RISK_CATEGORY_MARKET",
            "RISK_CATEGORY_CREDIT",
            "RISK_CATEGORY_LIQUIDITY",
            "RISK_CATEGORY_OPERATIONAL",
            "RISK_CATEGORY_CONCENTRATION",
            "RISK_CATEGORY_REGULATORY",
            "RISK_CATEGORY_SYSTEMIC",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RiskCategory;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "RISK_CATEGORY_UNSPECIFIED" => Ok(RiskCategory::Unspecified),
                    "RISK_CATEGORY_MARKET" => Ok(RiskCategory::Market),
                    "RISK_CATEGORY_CREDIT" => Ok(RiskCategory::Credit),
                    "RISK_CATEGORY_LIQUIDITY" => Ok(RiskCategory::Liquidity),
                    "RISK_CATEGORY_OPERATIONAL" => Ok(RiskCategory::Operational),
                    "RISK_CATEGORY_CONCENTRATION" => Ok(RiskCategory::Concentration),
                    "RISK_CATEGORY_REGULATORY" => Ok(RiskCategory::Regulatory),
                    "RISK_CATEGORY_SYSTEMIC" => Ok(RiskCategory::Systemic),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for RiskError {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.code.is_empty() {
            len += 1;
        }
        if !self.message.is_empty() {
            len += 1;
        }
        if !self.details.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.RiskError", len)?;
        if !self.code.is_empty() {
            struct_ser.serialize_field("code", &self.code)?;
        }
        if !self.message.is_empty() {
            struct_ser.serialize_field("message", &self.message)?;
        }
        if !self.details.is_empty() {
            struct_ser.serialize_field("details", &self.details)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RiskError {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "code",
            "message",
            "details",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Code,
            Message,
            Details,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "code" => Ok(GeneratedField::Code),
                            "message" => Ok(GeneratedField::Message),
                            "details" => Ok(GeneratedField::Details),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RiskError;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.RiskError")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RiskError, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut code__ = None;
                let mut message__ = None;
                let mut details__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Code => {
                            if code__.is_some() {
                                return Err(serde::de::Error::duplicate_field("code"));
                            }
                            code__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Message => {
                            if message__.is_some() {
                                return Err(serde::de::Error::duplicate_field("message"));
                            }
                            message__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Details => {
                            if details__.is_some() {
                                return Err(serde::de::Error::duplicate_field("details"));
                            }
                            details__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, _>>()?
                            );
                        }
                    }
                }
                Ok(RiskError {
                    code: code__.unwrap_or_default(),
                    message: message__.unwrap_or_default(),
                    details: details__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.RiskError", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RiskFactor {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.name.is_empty() {
            len += 1;
        }
        if self.category != 0 {
            len += 1;
        }
        if self.weight != 0. {
            len += 1;
        }
        if self.score != 0. {
            len += 1;
        }
        if !self.description.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.RiskFactor", len)?;
        if !self.name.is_empty() {
            struct_ser.serialize_field("name", &self.name)?;
        }
        if self.category != 0 {
            let v = RiskCategory::try_from(self.category)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.category)))?;
            struct_ser.serialize_field("category", &v)?;
        }
        if self.weight != 0. {
            struct_ser.serialize_field("weight", &self.weight)?;
        }
        if self.score != 0. {
            struct_ser.serialize_field("score", &self.score)?;
        }
        if !self.description.is_empty() {
            struct_ser.serialize_field("description", &self.description)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RiskFactor {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "name",
            "category",
            "weight",
            "score",
            "description",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Name,
            Category,
            Weight,
            Score,
            Description,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "name" => Ok(GeneratedField::Name),
                            "category" => Ok(GeneratedField::Category),
                            "weight" => Ok(GeneratedField::Weight),
                            "score" => Ok(GeneratedField::Score),
                            "description" => Ok(GeneratedField::Description),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RiskFactor;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.RiskFactor")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RiskFactor, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut name__ = None;
                let mut category__ = None;
                let mut weight__ = None;
                let mut score__ = None;
                let mut description__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Name => {
                            if name__.is_some() {
                                return Err(serde::de::Error::duplicate_field("name"));
                            }
                            name__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Category => {
                            if category__.is_some() {
                                return Err(serde::de::Error::duplicate_field("category"));
                            }
                            category__ = Some(map_.next_value::<RiskCategory>()? as i32);
                        }
                        GeneratedField::Weight => {
                            if weight__.is_some() {
                                return Err(serde::de::Error::duplicate_field("weight"));
                            }
                            weight__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Score => {
                            if score__.is_some() {
                                return Err(serde::de::Error::duplicate_field("score"));
                            }
                            score__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Description => {
                            if description__.is_some() {
                                return Err(serde::de::Error::duplicate_field("description"));
                            }
                            description__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(RiskFactor {
                    name: name__.unwrap_or_default(),
                    category: category__.unwrap_or_default(),
                    weight: weight__.unwrap_or_default(),
                    score: score__.unwrap_or_default(),
                    description: description__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.RiskFactor", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RiskLevel {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "RISK_LEVEL_UNSPECIFIED",
            Self::Minimal => "RISK_LEVEL_MINIMAL",
            Self::Low => "RISK_LEVEL_LOW",
            Self::Moderate => "RISK_LEVEL_MODERATE",
            Self::Elevated => "RISK_LEVEL_ELEVATED",
            Self::High => "RISK_LEVEL_HIGH",
            Self::Severe => "RISK_LEVEL_SEVERE",
            Self::Critical => "RISK_LEVEL_CRITICAL",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for RiskLevel {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "RISK_LEVEL_UNSPECIFIED",
            "RISK_LEVEL_MINIMAL",
            "RISK_LEVEL_LOW",
            "RISK_LEVEL_MODERATE",
            "RISK_LEVEL_ELEVATED",
            "RISK_LEVEL_HIGH",
            "RISK_LEVEL_SEVERE",
            "RISK_LEVEL_CRITICAL",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RiskLevel;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "RISK_LEVEL_UNSPECIFIED" => Ok(RiskLevel::Unspecified),
                    "RISK_LEVEL_MINIMAL" => Ok(RiskLevel::Minimal),
                    "RISK_LEVEL_LOW" => Ok(RiskLevel::Low),
                    "RISK_LEVEL_MODERATE" => Ok(RiskLevel::Moderate),
                    "RISK_LEVEL_ELEVATED" => Ok(RiskLevel::Elevated),
                    "RISK_LEVEL_HIGH" => Ok(RiskLevel::High),
                    "RISK_LEVEL_SEVERE" => Ok(RiskLevel::Severe),
                    "RISK_LEVEL_CRITICAL" => Ok(RiskLevel::Critical),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for RiskLimit {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.limit_id.is_empty() {
            len += 1;
        }
        if !self.account_id.is_empty() {
            len += 1;
        }
        if self.limit_type != 0 {
            len += 1;
        }
        if self.limit_value != 0. {
            len += 1;
        }
        if self.warning_threshold != 0. {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if self.enabled {
            len += 1;
        }
        if !self.scope.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.RiskLimit", len)?;
        if !self.limit_id.is_empty() {
            struct_ser.serialize_field("limitId", &self.limit_id)?;
        }
        if !self.account_id.is_empty() {
            struct_ser.serialize_field("accountId", &self.account_id)?;
        }
        if self.limit_type != 0 {
            let v = LimitType::try_from(self.limit_type)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.limit_type)))?;
            struct_ser.serialize_field("limitType", &v)?;
        }
        if self.limit_value != 0. {
            struct_ser.serialize_field("limitValue", &self.limit_value)?;
        }
        if self.warning_threshold != 0. {
            struct_ser.serialize_field("warningThreshold", &self.warning_threshold)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if self.enabled {
            struct_ser.serialize_field("enabled", &self.enabled)?;
        }
        if !self.scope.is_empty() {
            struct_ser.serialize_field("scope", &self.scope)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RiskLimit {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "limit_id",
            "limitId",
            "account_id",
            "accountId",
            "limit_type",
            "limitType",
            "limit_value",
            "limitValue",
            "warning_threshold",
            "warningThreshold",
            "currency",
            "enabled",
            "scope",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            LimitId,
            AccountId,
            LimitType,
            LimitValue,
            WarningThreshold,
            Currency,
            Enabled,
            Scope,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "limitId" | "limit_id" => Ok(GeneratedField::LimitId),
                            "accountId" | "account_id" => Ok(GeneratedField::AccountId),
                            "limitType" | "limit_type" => Ok(GeneratedField::LimitType),
                            "limitValue" | "limit_value" => Ok(GeneratedField::LimitValue),
                            "warningThreshold" | "warning_threshold" => Ok(GeneratedField::WarningThreshold),
                            "currency" => Ok(GeneratedField::Currency),
                            "enabled" => Ok(GeneratedField::Enabled),
                            "scope" => Ok(GeneratedField::Scope),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RiskLimit;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.RiskLimit")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RiskLimit, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut limit_id__ = None;
                let mut account_id__ = None;
                let mut limit_type__ = None;
                let mut limit_value__ = None;
                let mut warning_threshold__ = None;
                let mut currency__ = None;
                let mut enabled__ = None;
                let mut scope__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::LimitId => {
                            if limit_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limitId"));
                            }
                            limit_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AccountId => {
                            if account_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("accountId"));
                            }
                            account_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::LimitType => {
                            if limit_type__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limitType"));
                            }
                            limit_type__ = Some(map_.next_value::<LimitType>()? as i32);
                        }
                        GeneratedField::LimitValue => {
                            if limit_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limitValue"));
                            }
                            limit_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::WarningThreshold => {
                            if warning_threshold__.is_some() {
                                return Err(serde::de::Error::duplicate_field("warningThreshold"));
                            }
                            warning_threshold__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Currency => {
                            if currency__.is_some() {
                                return Err(serde::de::Error::duplicate_field("currency"));
                            }
                            currency__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Enabled => {
                            if enabled__.is_some() {
                                return Err(serde::de::Error::duplicate_field("enabled"));
                            }
                            enabled__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Scope => {
                            if scope__.is_some() {
                                return Err(serde::de::Error::duplicate_field("scope"));
                            }
                            scope__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(RiskLimit {
                    limit_id: limit_id__.unwrap_or_default(),
                    account_id: account_id__.unwrap_or_default(),
                    limit_type: limit_type__.unwrap_or_default(),
                    limit_value: limit_value__.unwrap_or_default(),
                    warning_threshold: warning_threshold__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    enabled: enabled__.unwrap_or_default(),
                    scope: scope__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.RiskLimit", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RiskReport {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.report_id.is_empty() {
            len += 1;
        }
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if self.metrics.is_some() {
            len += 1;
        }
        if !self.stress_results.is_empty() {
            len += 1;
        }
        if !self.violations.is_empty() {
            len += 1;
        }
        if !self.alerts.is_empty() {
            len += 1;
        }
        if !self.counterparties.is_empty() {
            len += 1;
        }
        if self.liquidity.is_some() {
            len += 1;
        }
        if !self.summary.is_empty() {
            len += 1;
        }
        if !self.generated_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.RiskReport", len)?;
        if !self.report_id.is_empty() {
            struct_ser.serialize_field("reportId", &self.report_id)?;
        }
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if let Some(v) = self.metrics.as_ref() {
            struct_ser.serialize_field("metrics", v)?;
        }
        if !self.stress_results.is_empty() {
            struct_ser.serialize_field("stressResults", &self.stress_results)?;
        }
        if !self.violations.is_empty() {
            struct_ser.serialize_field("violations", &self.violations)?;
        }
        if !self.alerts.is_empty() {
            struct_ser.serialize_field("alerts", &self.alerts)?;
        }
        if !self.counterparties.is_empty() {
            struct_ser.serialize_field("counterparties", &self.counterparties)?;
        }
        if let Some(v) = self.liquidity.as_ref() {
            struct_ser.serialize_field("liquidity", v)?;
        }
        if !self.summary.is_empty() {
            struct_ser.serialize_field("summary", &self.summary)?;
        }
        if !self.generated_at.is_empty() {
            struct_ser.serialize_field("generatedAt", &self.generated_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RiskReport {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "report_id",
            "reportId",
            "portfolio_id",
            "portfolioId",
            "metrics",
            "stress_results",
            "stressResults",
            "violations",
            "alerts",
            "counterparties",
            "liquidity",
            "summary",
            "generated_at",
            "generatedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            ReportId,
            PortfolioId,
            Metrics,
            StressResults,
            Violations,
            Alerts,
            Counterparties,
            Liquidity,
            Summary,
            GeneratedAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "reportId" | "report_id" => Ok(GeneratedField::ReportId),
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "metrics" => Ok(GeneratedField::Metrics),
                            "stressResults" | "stress_results" => Ok(GeneratedField::StressResults),
                            "violations" => Ok(GeneratedField::Violations),
                            "alerts" => Ok(GeneratedField::Alerts),
                            "counterparties" => Ok(GeneratedField::Counterparties),
                            "liquidity" => Ok(GeneratedField::Liquidity),
                            "summary" => Ok(GeneratedField::Summary),
                            "generatedAt" | "generated_at" => Ok(GeneratedField::GeneratedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RiskReport;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.RiskReport")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RiskReport, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut report_id__ = None;
                let mut portfolio_id__ = None;
                let mut metrics__ = None;
                let mut stress_results__ = None;
                let mut violations__ = None;
                let mut alerts__ = None;
                let mut counterparties__ = None;
                let mut liquidity__ = None;
                let mut summary__ = None;
                let mut generated_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::ReportId => {
                            if report_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("reportId"));
                            }
                            report_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Metrics => {
                            if metrics__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metrics"));
                            }
                            metrics__ = map_.next_value()?;
                        }
                        GeneratedField::StressResults => {
                            if stress_results__.is_some() {
                                return Err(serde::de::Error::duplicate_field("stressResults"));
                            }
                            stress_results__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Violations => {
                            if violations__.is_some() {
                                return Err(serde::de::Error::duplicate_field("violations"));
                            }
                            violations__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Alerts => {
                            if alerts__.is_some() {
                                return Err(serde::de::Error::duplicate_field("alerts"));
                            }
                            alerts__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Counterparties => {
                            if counterparties__.is_some() {
                                return Err(serde::de::Error::duplicate_field("counterparties"));
                            }
                            counterparties__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Liquidity => {
                            if liquidity__.is_some() {
                                return Err(serde::de::Error::duplicate_field("liquidity"));
                            }
                            liquidity__ = map_.next_value()?;
                        }
                        GeneratedField::Summary => {
                            if summary__.is_some() {
                                return Err(serde::de::Error::duplicate_field("summary"));
                            }
                            summary__ = Some(map_.next_value()?);
                        }
                        GeneratedField::GeneratedAt => {
                            if generated_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("generatedAt"));
                            }
                            generated_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(RiskReport {
                    report_id: report_id__.unwrap_or_default(),
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    metrics: metrics__,
                    stress_results: stress_results__.unwrap_or_default(),
                    violations: violations__.unwrap_or_default(),
                    alerts: alerts__.unwrap_or_default(),
                    counterparties: counterparties__.unwrap_or_default(),
                    liquidity: liquidity__,
                    summary: summary__.unwrap_or_default(),
                    generated_at: generated_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.RiskReport", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RiskScorePoint {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.timestamp.is_empty() {
            len += 1;
        }
        if self.risk_score != 0. {
            len += 1;
        }
        if self.risk_level != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.RiskScorePoint", len)?;
        if !self.timestamp.is_empty() {
            struct_ser.serialize_field("timestamp", &self.timestamp)?;
        }
        if self.risk_score != 0. {
            struct_ser.serialize_field("riskScore", &self.risk_score)?;
        }
        if self.risk_level != 0 {
            let v = RiskLevel::try_from(self.risk_level)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.risk_level)))?;
            struct_ser.serialize_field("riskLevel", &v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RiskScorePoint {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "timestamp",
            "risk_score",
            "riskScore",
            "risk_level",
            "riskLevel",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Timestamp,
            RiskScore,
            RiskLevel,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "timestamp" => Ok(GeneratedField::Timestamp),
                            "riskScore" | "risk_score" => Ok(GeneratedField::RiskScore),
                            "riskLevel" | "risk_level" => Ok(GeneratedField::RiskLevel),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RiskScorePoint;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.RiskScorePoint")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RiskScorePoint, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut timestamp__ = None;
                let mut risk_score__ = None;
                let mut risk_level__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Timestamp => {
                            if timestamp__.is_some() {
                                return Err(serde::de::Error::duplicate_field("timestamp"));
                            }
                            timestamp__ = Some(map_.next_value()?);
                        }
                        GeneratedField::RiskScore => {
                            if risk_score__.is_some() {
                                return Err(serde::de::Error::duplicate_field("riskScore"));
                            }
                            risk_score__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::RiskLevel => {
                            if risk_level__.is_some() {
                                return Err(serde::de::Error::duplicate_field("riskLevel"));
                            }
                            risk_level__ = Some(map_.next_value::<RiskLevel>()? as i32);
                        }
                    }
                }
                Ok(RiskScorePoint {
                    timestamp: timestamp__.unwrap_or_default(),
                    risk_score: risk_score__.unwrap_or_default(),
                    risk_level: risk_level__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.RiskScorePoint", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RunStressTestRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.portfolio_id.is_empty() {
            len += 1;
        }
        if self.portfolio.is_some() {
            len += 1;
        }
        if !self.scenarios.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.RunStressTestRequest", len)?;
        if !self.portfolio_id.is_empty() {
            struct_ser.serialize_field("portfolioId", &self.portfolio_id)?;
        }
        if let Some(v) = self.portfolio.as_ref() {
            struct_ser.serialize_field("portfolio", v)?;
        }
        if !self.scenarios.is_empty() {
            struct_ser.serialize_field("scenarios", &self.scenarios)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RunStressTestRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio_id",
            "portfolioId",
            "portfolio",
            "scenarios",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PortfolioId,
            Portfolio,
            Scenarios,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolioId" | "portfolio_id" => Ok(GeneratedField::PortfolioId),
                            "portfolio" => Ok(GeneratedField::Portfolio),
                            "scenarios" => Ok(GeneratedField::Scenarios),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RunStressTestRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.RunStressTestRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RunStressTestRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio_id__ = None;
                let mut portfolio__ = None;
                let mut scenarios__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PortfolioId => {
                            if portfolio_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioId"));
                            }
                            portfolio_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Portfolio => {
                            if portfolio__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolio"));
                            }
                            portfolio__ = map_.next_value()?;
                        }
                        GeneratedField::Scenarios => {
                            if scenarios__.is_some() {
                                return Err(serde::de::Error::duplicate_field("scenarios"));
                            }
                            scenarios__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(RunStressTestRequest {
                    portfolio_id: portfolio_id__.unwrap_or_default(),
                    portfolio: portfolio__,
                    scenarios: scenarios__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.RunStressTestRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RunStressTestResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.results.is_empty() {
            len += 1;
        }
        if self.error.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.RunStressTestResponse", len)?;
        if !self.results.is_empty() {
            struct_ser.serialize_field("results", &self.results)?;
        }
        if let Some(v) = self.error.as_ref() {
            struct_ser.serialize_field("error", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RunStressTestResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "results",
            "error",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Results,
            Error,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "results" => Ok(GeneratedField::Results),
                            "error" => Ok(GeneratedField::Error),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RunStressTestResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.RunStressTestResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RunStressTestResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut results__ = None;
                let mut error__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Results => {
                            if results__.is_some() {
                                return Err(serde::de::Error::duplicate_field("results"));
                            }
                            results__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Error => {
                            if error__.is_some() {
                                return Err(serde::de::Error::duplicate_field("error"));
                            }
                            error__ = map_.next_value()?;
                        }
                    }
                }
                Ok(RunStressTestResponse {
                    results: results__.unwrap_or_default(),
                    error: error__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.RunStressTestResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ScenarioType {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "SCENARIO_TYPE_UNSPECIFIED",
            Self::Historical => "SCENARIO_TYPE_HISTORICAL",
            Self::Hypothetical => "SCENARIO_TYPE_HYPOTHETICAL",
            Self::Reverse => "SCENARIO_TYPE_REVERSE",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for ScenarioType {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "SCENARIO_TYPE_UNSPECIFIED",
            "SCENARIO_TYPE_HISTORICAL",
            "SCENARIO_TYPE_HYPOTHETICAL",
            "SCENARIO_TYPE_REVERSE",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ScenarioType;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "SCENARIO_TYPE_UNSPECIFIED" => Ok(ScenarioType::Unspecified),
                    "SCENARIO_TYPE_HISTORICAL" => Ok(ScenarioType::Historical),
                    "SCENARIO_TYPE_HYPOTHETICAL" => Ok(ScenarioType::Hypothetical),
                    "SCENARIO_TYPE_REVERSE" => Ok(ScenarioType::Reverse),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for SetRiskLimitRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.limit.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.SetRiskLimitRequest", len)?;
        if let Some(v) = self.limit.as_ref() {
            struct_ser.serialize_field("limit", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for SetRiskLimitRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "limit",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Limit,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "limit" => Ok(GeneratedField::Limit),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = SetRiskLimitRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.SetRiskLimitRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<SetRiskLimitRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut limit__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Limit => {
                            if limit__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limit"));
                            }
                            limit__ = map_.next_value()?;
                        }
                    }
                }
                Ok(SetRiskLimitRequest {
                    limit: limit__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.SetRiskLimitRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for SetRiskLimitResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.limit.is_some() {
            len += 1;
        }
        if self.success {
            len += 1;
        }
        if self.error.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.SetRiskLimitResponse", len)?;
        if let Some(v) = self.limit.as_ref() {
            struct_ser.serialize_field("limit", v)?;
        }
        if self.success {
            struct_ser.serialize_field("success", &self.success)?;
        }
        if let Some(v) = self.error.as_ref() {
            struct_ser.serialize_field("error", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for SetRiskLimitResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "limit",
            "success",
            "error",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Limit,
            Success,
            Error,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "limit" => Ok(GeneratedField::Limit),
                            "success" => Ok(GeneratedField::Success),
                            "error" => Ok(GeneratedField::Error),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = SetRiskLimitResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.SetRiskLimitResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<SetRiskLimitResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut limit__ = None;
                let mut success__ = None;
                let mut error__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Limit => {
                            if limit__.is_some() {
                                return Err(serde::de::Error::duplicate_field("limit"));
                            }
                            limit__ = map_.next_value()?;
                        }
                        GeneratedField::Success => {
                            if success__.is_some() {
                                return Err(serde::de::Error::duplicate_field("success"));
                            }
                            success__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Error => {
                            if error__.is_some() {
                                return Err(serde::de::Error::duplicate_field("error"));
                            }
                            error__ = map_.next_value()?;
                        }
                    }
                }
                Ok(SetRiskLimitResponse {
                    limit: limit__,
                    success: success__.unwrap_or_default(),
                    error: error__,
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.SetRiskLimitResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for StressScenario {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.scenario_id.is_empty() {
            len += 1;
        }
        if !self.name.is_empty() {
            len += 1;
        }
        if self.scenario_type != 0 {
            len += 1;
        }
        if !self.shocks.is_empty() {
            len += 1;
        }
        if !self.description.is_empty() {
            len += 1;
        }
        if self.probability != 0. {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.StressScenario", len)?;
        if !self.scenario_id.is_empty() {
            struct_ser.serialize_field("scenarioId", &self.scenario_id)?;
        }
        if !self.name.is_empty() {
            struct_ser.serialize_field("name", &self.name)?;
        }
        if self.scenario_type != 0 {
            let v = ScenarioType::try_from(self.scenario_type)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.scenario_type)))?;
            struct_ser.serialize_field("scenarioType", &v)?;
        }
        if !self.shocks.is_empty() {
            struct_ser.serialize_field("shocks", &self.shocks)?;
        }
        if !self.description.is_empty() {
            struct_ser.serialize_field("description", &self.description)?;
        }
        if self.probability != 0. {
            struct_ser.serialize_field("probability", &self.probability)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for StressScenario {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "scenario_id",
            "scenarioId",
            "name",
            "scenario_type",
            "scenarioType",
            "shocks",
            "description",
            "probability",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            ScenarioId,
            Name,
            ScenarioType,
            Shocks,
            Description,
            Probability,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "scenarioId" | "scenario_id" => Ok(GeneratedField::ScenarioId),
                            "name" => Ok(GeneratedField::Name),
                            "scenarioType" | "scenario_type" => Ok(GeneratedField::ScenarioType),
                            "shocks" => Ok(GeneratedField::Shocks),
                            "description" => Ok(GeneratedField::Description),
                            "probability" => Ok(GeneratedField::Probability),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = StressScenario;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.StressScenario")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<StressScenario, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut scenario_id__ = None;
                let mut name__ = None;
                let mut scenario_type__ = None;
                let mut shocks__ = None;
                let mut description__ = None;
                let mut probability__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::ScenarioId => {
                            if scenario_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("scenarioId"));
                            }
                            scenario_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Name => {
                            if name__.is_some() {
                                return Err(serde::de::Error::duplicate_field("name"));
                            }
                            name__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ScenarioType => {
                            if scenario_type__.is_some() {
                                return Err(serde::de::Error::duplicate_field("scenarioType"));
                            }
                            scenario_type__ = Some(map_.next_value::<ScenarioType>()? as i32);
                        }
                        GeneratedField::Shocks => {
                            if shocks__.is_some() {
                                return Err(serde::de::Error::duplicate_field("shocks"));
                            }
                            shocks__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, ::pbjson::private::NumberDeserialize<f64>>>()?
                                    .into_iter().map(|(k,v)| (k, v.0)).collect()
                            );
                        }
                        GeneratedField::Description => {
                            if description__.is_some() {
                                return Err(serde::de::Error::duplicate_field("description"));
                            }
                            description__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Probability => {
                            if probability__.is_some() {
                                return Err(serde::de::Error::duplicate_field("probability"));
                            }
                            probability__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(StressScenario {
                    scenario_id: scenario_id__.unwrap_or_default(),
                    name: name__.unwrap_or_default(),
                    scenario_type: scenario_type__.unwrap_or_default(),
                    shocks: shocks__.unwrap_or_default(),
                    description: description__.unwrap_or_default(),
                    probability: probability__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.StressScenario", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for StressTestResult {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.scenario.is_some() {
            len += 1;
        }
        if self.portfolio_impact != 0. {
            len += 1;
        }
        if self.impact_percent != 0. {
            len += 1;
        }
        if !self.position_impacts.is_empty() {
            len += 1;
        }
        if !self.breached_limits.is_empty() {
            len += 1;
        }
        if self.resulting_risk_level != 0 {
            len += 1;
        }
        if !self.run_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.StressTestResult", len)?;
        if let Some(v) = self.scenario.as_ref() {
            struct_ser.serialize_field("scenario", v)?;
        }
        if self.portfolio_impact != 0. {
            struct_ser.serialize_field("portfolioImpact", &self.portfolio_impact)?;
        }
        if self.impact_percent != 0. {
            struct_ser.serialize_field("impactPercent", &self.impact_percent)?;
        }
        if !self.position_impacts.is_empty() {
            struct_ser.serialize_field("positionImpacts", &self.position_impacts)?;
        }
        if !self.breached_limits.is_empty() {
            struct_ser.serialize_field("breachedLimits", &self.breached_limits)?;
        }
        if self.resulting_risk_level != 0 {
            let v = RiskLevel::try_from(self.resulting_risk_level)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.resulting_risk_level)))?;
            struct_ser.serialize_field("resultingRiskLevel", &v)?;
        }
        if !self.run_at.is_empty() {
            struct_ser.serialize_field("runAt", &self.run_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for StressTestResult {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "scenario",
            "portfolio_impact",
            "portfolioImpact",
            "impact_percent",
            "impactPercent",
            "position_impacts",
            "positionImpacts",
            "breached_limits",
            "breachedLimits",
            "resulting_risk_level",
            "resultingRiskLevel",
            "run_at",
            "runAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Scenario,
            PortfolioImpact,
            ImpactPercent,
            PositionImpacts,
            BreachedLimits,
            ResultingRiskLevel,
            RunAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "scenario" => Ok(GeneratedField::Scenario),
                            "portfolioImpact" | "portfolio_impact" => Ok(GeneratedField::PortfolioImpact),
                            "impactPercent" | "impact_percent" => Ok(GeneratedField::ImpactPercent),
                            "positionImpacts" | "position_impacts" => Ok(GeneratedField::PositionImpacts),
                            "breachedLimits" | "breached_limits" => Ok(GeneratedField::BreachedLimits),
                            "resultingRiskLevel" | "resulting_risk_level" => Ok(GeneratedField::ResultingRiskLevel),
                            "runAt" | "run_at" => Ok(GeneratedField::RunAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = StressTestResult;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.StressTestResult")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<StressTestResult, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut scenario__ = None;
                let mut portfolio_impact__ = None;
                let mut impact_percent__ = None;
                let mut position_impacts__ = None;
                let mut breached_limits__ = None;
                let mut resulting_risk_level__ = None;
                let mut run_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Scenario => {
                            if scenario__.is_some() {
                                return Err(serde::de::Error::duplicate_field("scenario"));
                            }
                            scenario__ = map_.next_value()?;
                        }
                        GeneratedField::PortfolioImpact => {
                            if portfolio_impact__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioImpact"));
                            }
                            portfolio_impact__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::ImpactPercent => {
                            if impact_percent__.is_some() {
                                return Err(serde::de::Error::duplicate_field("impactPercent"));
                            }
                            impact_percent__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::PositionImpacts => {
                            if position_impacts__.is_some() {
                                return Err(serde::de::Error::duplicate_field("positionImpacts"));
                            }
                            position_impacts__ = Some(map_.next_value()?);
                        }
                        GeneratedField::BreachedLimits => {
                            if breached_limits__.is_some() {
                                return Err(serde::de::Error::duplicate_field("breachedLimits"));
                            }
                            breached_limits__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ResultingRiskLevel => {
                            if resulting_risk_level__.is_some() {
                                return Err(serde::de::Error::duplicate_field("resultingRiskLevel"));
                            }
                            resulting_risk_level__ = Some(map_.next_value::<RiskLevel>()? as i32);
                        }
                        GeneratedField::RunAt => {
                            if run_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("runAt"));
                            }
                            run_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(StressTestResult {
                    scenario: scenario__,
                    portfolio_impact: portfolio_impact__.unwrap_or_default(),
                    impact_percent: impact_percent__.unwrap_or_default(),
                    position_impacts: position_impacts__.unwrap_or_default(),
                    breached_limits: breached_limits__.unwrap_or_default(),
                    resulting_risk_level: resulting_risk_level__.unwrap_or_default(),
                    run_at: run_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.StressTestResult", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for SubscribeRiskAlertsRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.portfolio_ids.is_empty() {
            len += 1;
        }
        if self.min_severity != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.SubscribeRiskAlertsRequest", len)?;
        if !self.portfolio_ids.is_empty() {
            struct_ser.serialize_field("portfolioIds", &self.portfolio_ids)?;
        }
        if self.min_severity != 0 {
            let v = AlertSeverity::try_from(self.min_severity)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.min_severity)))?;
            struct_ser.serialize_field("minSeverity", &v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for SubscribeRiskAlertsRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "portfolio_ids",
            "portfolioIds",
            "min_severity",
            "minSeverity",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PortfolioIds,
            MinSeverity,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "portfolioIds" | "portfolio_ids" => Ok(GeneratedField::PortfolioIds),
                            "minSeverity" | "min_severity" => Ok(GeneratedField::MinSeverity),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = SubscribeRiskAlertsRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.SubscribeRiskAlertsRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<SubscribeRiskAlertsRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut portfolio_ids__ = None;
                let mut min_severity__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PortfolioIds => {
                            if portfolio_ids__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioIds"));
                            }
                            portfolio_ids__ = Some(map_.next_value()?);
                        }
                        GeneratedField::MinSeverity => {
                            if min_severity__.is_some() {
                                return Err(serde::de::Error::duplicate_field("minSeverity"));
                            }
                            min_severity__ = Some(map_.next_value::<AlertSeverity>()? as i32);
                        }
                    }
                }
                Ok(SubscribeRiskAlertsRequest {
                    portfolio_ids: portfolio_ids__.unwrap_or_default(),
                    min_severity: min_severity__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.SubscribeRiskAlertsRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for TradeDetails {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.trade_id.is_empty() {
            len += 1;
        }
        if !self.account_id.is_empty() {
            len += 1;
        }
        if !self.symbol.is_empty() {
            len += 1;
        }
        if self.side != 0 {
            len += 1;
        }
        if self.quantity != 0. {
            len += 1;
        }
        if self.price != 0. {
            len += 1;
        }
        if !self.asset_class.is_empty() {
            len += 1;
        }
        if !self.venue.is_empty() {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if !self.timestamp.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.TradeDetails", len)?;
        if !self.trade_id.is_empty() {
            struct_ser.serialize_field("tradeId", &self.trade_id)?;
        }
        if !self.account_id.is_empty() {
            struct_ser.serialize_field("accountId", &self.account_id)?;
        }
        if !self.symbol.is_empty() {
            struct_ser.serialize_field("symbol", &self.symbol)?;
        }
        if self.side != 0 {
            let v = TradeSide::try_from(self.side)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.side)))?;
            struct_ser.serialize_field("side", &v)?;
        }
        if self.quantity != 0. {
            struct_ser.serialize_field("quantity", &self.quantity)?;
        }
        if self.price != 0. {
            struct_ser.serialize_field("price", &self.price)?;
        }
        if !self.asset_class.is_empty() {
            struct_ser.serialize_field("assetClass", &self.asset_class)?;
        }
        if !self.venue.is_empty() {
            struct_ser.serialize_field("venue", &self.venue)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if !self.timestamp.is_empty() {
            struct_ser.serialize_field("timestamp", &self.timestamp)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for TradeDetails {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "trade_id",
            "tradeId",
            "account_id",
            "accountId",
            "symbol",
            "side",
            "quantity",
            "price",
            "asset_class",
            "assetClass",
            "venue",
            "currency",
            "timestamp",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            TradeId,
            AccountId,
            Symbol,
            Side,
            Quantity,
            Price,
            AssetClass,
            Venue,
            Currency,
            Timestamp,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "tradeId" | "trade_id" => Ok(GeneratedField::TradeId),
                            "accountId" | "account_id" => Ok(GeneratedField::AccountId),
                            "symbol" => Ok(GeneratedField::Symbol),
                            "side" => Ok(GeneratedField::Side),
                            "quantity" => Ok(GeneratedField::Quantity),
                            "price" => Ok(GeneratedField::Price),
                            "assetClass" | "asset_class" => Ok(GeneratedField::AssetClass),
                            "venue" => Ok(GeneratedField::Venue),
                            "currency" => Ok(GeneratedField::Currency),
                            "timestamp" => Ok(GeneratedField::Timestamp),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = TradeDetails;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.TradeDetails")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<TradeDetails, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut trade_id__ = None;
                let mut account_id__ = None;
                let mut symbol__ = None;
                let mut side__ = None;
                let mut quantity__ = None;
                let mut price__ = None;
                let mut asset_class__ = None;
                let mut venue__ = None;
                let mut currency__ = None;
                let mut timestamp__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::TradeId => {
                            if trade_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("tradeId"));
                            }
                            trade_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AccountId => {
                            if account_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("accountId"));
                            }
                            account_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Symbol => {
                            if symbol__.is_some() {
                                return Err(serde::de::Error::duplicate_field("symbol"));
                            }
                            symbol__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Side => {
                            if side__.is_some() {
                                return Err(serde::de::Error::duplicate_field("side"));
                            }
                            side__ = Some(map_.next_value::<TradeSide>()? as i32);
                        }
                        GeneratedField::Quantity => {
                            if quantity__.is_some() {
                                return Err(serde::de::Error::duplicate_field("quantity"));
                            }
                            quantity__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Price => {
                            if price__.is_some() {
                                return Err(serde::de::Error::duplicate_field("price"));
                            }
                            price__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::AssetClass => {
                            if asset_class__.is_some() {
                                return Err(serde::de::Error::duplicate_field("assetClass"));
                            }
                            asset_class__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Venue => {
                            if venue__.is_some() {
                                return Err(serde::de::Error::duplicate_field("venue"));
                            }
                            venue__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Currency => {
                            if currency__.is_some() {
                                return Err(serde::de::Error::duplicate_field("currency"));
                            }
                            currency__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Timestamp => {
                            if timestamp__.is_some() {
                                return Err(serde::de::Error::duplicate_field("timestamp"));
                            }
                            timestamp__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(TradeDetails {
                    trade_id: trade_id__.unwrap_or_default(),
                    account_id: account_id__.unwrap_or_default(),
                    symbol: symbol__.unwrap_or_default(),
                    side: side__.unwrap_or_default(),
                    quantity: quantity__.unwrap_or_default(),
                    price: price__.unwrap_or_default(),
                    asset_class: asset_class__.unwrap_or_default(),
                    venue: venue__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    timestamp: timestamp__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.TradeDetails", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for TradeRiskAssessment {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.trade_id.is_empty() {
            len += 1;
        }
        if self.risk_score != 0. {
            len += 1;
        }
        if self.risk_level != 0 {
            len += 1;
        }
        if !self.factors.is_empty() {
            len += 1;
        }
        if !self.warnings.is_empty() {
            len += 1;
        }
        if self.approved {
            len += 1;
        }
        if self.notional_value != 0. {
            len += 1;
        }
        if self.portfolio_impact != 0. {
            len += 1;
        }
        if !self.assessed_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.TradeRiskAssessment", len)?;
        if !self.trade_id.is_empty() {
            struct_ser.serialize_field("tradeId", &self.trade_id)?;
        }
        if self.risk_score != 0. {
            struct_ser.serialize_field("riskScore", &self.risk_score)?;
        }
        if self.risk_level != 0 {
            let v = RiskLevel::try_from(self.risk_level)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.risk_level)))?;
            struct_ser.serialize_field("riskLevel", &v)?;
        }
        if !self.factors.is_empty() {
            struct_ser.serialize_field("factors", &self.factors)?;
        }
        if !self.warnings.is_empty() {
            struct_ser.serialize_field("warnings", &self.warnings)?;
        }
        if self.approved {
            struct_ser.serialize_field("approved", &self.approved)?;
        }
        if self.notional_value != 0. {
            struct_ser.serialize_field("notionalValue", &self.notional_value)?;
        }
        if self.portfolio_impact != 0. {
            struct_ser.serialize_field("portfolioImpact", &self.portfolio_impact)?;
        }
        if !self.assessed_at.is_empty() {
            struct_ser.serialize_field("assessedAt", &self.assessed_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for TradeRiskAssessment {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "trade_id",
            "tradeId",
            "risk_score",
            "riskScore",
            "risk_level",
            "riskLevel",
            "factors",
            "warnings",
            "approved",
            "notional_value",
            "notionalValue",
            "portfolio_impact",
            "portfolioImpact",
            "assessed_at",
            "assessedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            TradeId,
            RiskScore,
            RiskLevel,
            Factors,
            Warnings,
            Approved,
            NotionalValue,
            PortfolioImpact,
            AssessedAt,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "tradeId" | "trade_id" => Ok(GeneratedField::TradeId),
                            "riskScore" | "risk_score" => Ok(GeneratedField::RiskScore),
                            "riskLevel" | "risk_level" => Ok(GeneratedField::RiskLevel),
                            "factors" => Ok(GeneratedField::Factors),
                            "warnings" => Ok(GeneratedField::Warnings),
                            "approved" => Ok(GeneratedField::Approved),
                            "notionalValue" | "notional_value" => Ok(GeneratedField::NotionalValue),
                            "portfolioImpact" | "portfolio_impact" => Ok(GeneratedField::PortfolioImpact),
                            "assessedAt" | "assessed_at" => Ok(GeneratedField::AssessedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = TradeRiskAssessment;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.TradeRiskAssessment")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<TradeRiskAssessment, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut trade_id__ = None;
                let mut risk_score__ = None;
                let mut risk_level__ = None;
                let mut factors__ = None;
                let mut warnings__ = None;
                let mut approved__ = None;
                let mut notional_value__ = None;
                let mut portfolio_impact__ = None;
                let mut assessed_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::TradeId => {
                            if trade_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("tradeId"));
                            }
                            trade_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::RiskScore => {
                            if risk_score__.is_some() {
                                return Err(serde::de::Error::duplicate_field("riskScore"));
                            }
                            risk_score__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::RiskLevel => {
                            if risk_level__.is_some() {
                                return Err(serde::de::Error::duplicate_field("riskLevel"));
                            }
                            risk_level__ = Some(map_.next_value::<RiskLevel>()? as i32);
                        }
                        GeneratedField::Factors => {
                            if factors__.is_some() {
                                return Err(serde::de::Error::duplicate_field("factors"));
                            }
                            factors__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Warnings => {
                            if warnings__.is_some() {
                                return Err(serde::de::Error::duplicate_field("warnings"));
                            }
                            warnings__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Approved => {
                            if approved__.is_some() {
                                return Err(serde::de::Error::duplicate_field("approved"));
                            }
                            approved__ = Some(map_.next_value()?);
                        }
                        GeneratedField::NotionalValue => {
                            if notional_value__.is_some() {
                                return Err(serde::de::Error::duplicate_field("notionalValue"));
                            }
                            notional_value__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::PortfolioImpact => {
                            if portfolio_impact__.is_some() {
                                return Err(serde::de::Error::duplicate_field("portfolioImpact"));
                            }
                            portfolio_impact__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::AssessedAt => {
                            if assessed_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("assessedAt"));
                            }
                            assessed_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(TradeRiskAssessment {
                    trade_id: trade_id__.unwrap_or_default(),
                    risk_score: risk_score__.unwrap_or_default(),
                    risk_level: risk_level__.unwrap_or_default(),
                    factors: factors__.unwrap_or_default(),
                    warnings: warnings__.unwrap_or_default(),
                    approved: approved__.unwrap_or_default(),
                    notional_value: notional_value__.unwrap_or_default(),
                    portfolio_impact: portfolio_impact__.unwrap_or_default(),
                    assessed_at: assessed_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.TradeRiskAssessment", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for TradeSide {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "TRADE_SIDE_UNSPECIFIED",
            Self::Buy => "TRADE_SIDE_BUY",
            Self::Sell => "TRADE_SIDE_SELL",
            Self::ShortSell => "TRADE_SIDE_SHORT_SELL",
            Self::BuyToCover => "TRADE_SIDE_BUY_TO_COVER",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for TradeSide {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "TRADE_SIDE_UNSPECIFIED",
            "TRADE_SIDE_BUY",
            "TRADE_SIDE_SELL",
            "TRADE_SIDE_SHORT_SELL",
            "TRADE_SIDE_BUY_TO_COVER",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = TradeSide;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "TRADE_SIDE_UNSPECIFIED" => Ok(TradeSide::Unspecified),
                    "TRADE_SIDE_BUY" => Ok(TradeSide::Buy),
                    "TRADE_SIDE_SELL" => Ok(TradeSide::Sell),
                    "TRADE_SIDE_SHORT_SELL" => Ok(TradeSide::ShortSell),
                    "TRADE_SIDE_BUY_TO_COVER" => Ok(TradeSide::BuyToCover),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for TransactionDetails {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.transaction_id.is_empty() {
            len += 1;
        }
        if !self.user_id.is_empty() {
            len += 1;
        }
        if self.amount != 0. {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if !self.merchant_id.is_empty() {
            len += 1;
        }
        if !self.merchant_category.is_empty() {
            len += 1;
        }
        if !self.payment_method.is_empty() {
            len += 1;
        }
        if self.device.is_some() {
            len += 1;
        }
        if !self.metadata.is_empty() {
            len += 1;
        }
        if !self.timestamp.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.TransactionDetails", len)?;
        if !self.transaction_id.is_empty() {
            struct_ser.serialize_field("transactionId", &self.transaction_id)?;
        }
        if !self.user_id.is_empty() {
            struct_ser.serialize_field("userId", &self.user_id)?;
        }
        if self.amount != 0. {
            struct_ser.serialize_field("amount", &self.amount)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if !self.merchant_id.is_empty() {
            struct_ser.serialize_field("merchantId", &self.merchant_id)?;
        }
        if !self.merchant_category.is_empty() {
            struct_ser.serialize_field("merchantCategory", &self.merchant_category)?;
        }
        if !self.payment_method.is_empty() {
            struct_ser.serialize_field("paymentMethod", &self.payment_method)?;
        }
        if let Some(v) = self.device.as_ref() {
            struct_ser.serialize_field("device", v)?;
        }
        if !self.metadata.is_empty() {
            struct_ser.serialize_field("metadata", &self.metadata)?;
        }
        if !self.timestamp.is_empty() {
            struct_ser.serialize_field("timestamp", &self.timestamp)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for TransactionDetails {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "transaction_id",
            "transactionId",
            "user_id",
            "userId",
            "amount",
            "currency",
            "merchant_id",
            "merchantId",
            "merchant_category",
            "merchantCategory",
            "payment_method",
            "paymentMethod",
            "device",
            "metadata",
            "timestamp",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            TransactionId,
            UserId,
            Amount,
            Currency,
            MerchantId,
            MerchantCategory,
            PaymentMethod,
            Device,
            Metadata,
            Timestamp,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "transactionId" | "transaction_id" => Ok(GeneratedField::TransactionId),
                            "userId" | "user_id" => Ok(GeneratedField::UserId),
                            "amount" => Ok(GeneratedField::Amount),
                            "currency" => Ok(GeneratedField::Currency),
                            "merchantId" | "merchant_id" => Ok(GeneratedField::MerchantId),
                            "merchantCategory" | "merchant_category" => Ok(GeneratedField::MerchantCategory),
                            "paymentMethod" | "payment_method" => Ok(GeneratedField::PaymentMethod),
                            "device" => Ok(GeneratedField::Device),
                            "metadata" => Ok(GeneratedField::Metadata),
                            "timestamp" => Ok(GeneratedField::Timestamp),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = TransactionDetails;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.TransactionDetails")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<TransactionDetails, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut transaction_id__ = None;
                let mut user_id__ = None;
                let mut amount__ = None;
                let mut currency__ = None;
                let mut merchant_id__ = None;
                let mut merchant_category__ = None;
                let mut payment_method__ = None;
                let mut device__ = None;
                let mut metadata__ = None;
                let mut timestamp__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::TransactionId => {
                            if transaction_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("transactionId"));
                            }
                            transaction_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::UserId => {
                            if user_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("userId"));
                            }
                            user_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Amount => {
                            if amount__.is_some() {
                                return Err(serde::de::Error::duplicate_field("amount"));
                            }
                            amount__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Currency => {
                            if currency__.is_some() {
                                return Err(serde::de::Error::duplicate_field("currency"));
                            }
                            currency__ = Some(map_.next_value()?);
                        }
                        GeneratedField::MerchantId => {
                            if merchant_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("merchantId"));
                            }
                            merchant_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::MerchantCategory => {
                            if merchant_category__.is_some() {
                                return Err(serde::de::Error::duplicate_field("merchantCategory"));
                            }
                            merchant_category__ = Some(map_.next_value()?);
                        }
                        GeneratedField::PaymentMethod => {
                            if payment_method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentMethod"));
                            }
                            payment_method__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Device => {
                            if device__.is_some() {
                                return Err(serde::de::Error::duplicate_field("device"));
                            }
                            device__ = map_.next_value()?;
                        }
                        GeneratedField::Metadata => {
                            if metadata__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metadata"));
                            }
                            metadata__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, _>>()?
                            );
                        }
                        GeneratedField::Timestamp => {
                            if timestamp__.is_some() {
                                return Err(serde::de::Error::duplicate_field("timestamp"));
                            }
                            timestamp__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(TransactionDetails {
                    transaction_id: transaction_id__.unwrap_or_default(),
                    user_id: user_id__.unwrap_or_default(),
                    amount: amount__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    merchant_id: merchant_id__.unwrap_or_default(),
                    merchant_category: merchant_category__.unwrap_or_default(),
                    payment_method: payment_method__.unwrap_or_default(),
                    device: device__,
                    metadata: metadata__.unwrap_or_default(),
                    timestamp: timestamp__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.TransactionDetails", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ValueAtRisk {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.var_95 != 0. {
            len += 1;
        }
        if self.var_99 != 0. {
            len += 1;
        }
        if self.var_999 != 0. {
            len += 1;
        }
        if self.method != 0 {
            len += 1;
        }
        if self.horizon_days != 0 {
            len += 1;
        }
        if self.lookback_days != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("risk.v1.ValueAtRisk", len)?;
        if self.var_95 != 0. {
            struct_ser.serialize_field("var95", &self.var_95)?;
        }
        if self.var_99 != 0. {
            struct_ser.serialize_field("var99", &self.var_99)?;
        }
        if self.var_999 != 0. {
            struct_ser.serialize_field("var999", &self.var_999)?;
        }
        if self.method != 0 {
            let v = VarMethod::try_from(self.method)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.method)))?;
            struct_ser.serialize_field("method", &v)?;
        }
        if self.horizon_days != 0 {
            struct_ser.serialize_field("horizonDays", &self.horizon_days)?;
        }
        if self.lookback_days != 0 {
            struct_ser.serialize_field("lookbackDays", &self.lookback_days)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ValueAtRisk {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "var_95",
            "var95",
            "var_99",
            "var99",
            "var_999",
            "var999",
            "method",
            "horizon_days",
            "horizonDays",
            "lookback_days",
            "lookbackDays",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Var95,
            Var99,
            Var999,
            Method,
            HorizonDays,
            LookbackDays,
        }
        impl<'de> serde::Deserialize<'de> for GeneratedField {
            fn deserialize<D>(deserializer: D) -> std::result::Result<GeneratedField, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct GeneratedVisitor;

                impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
                    type Value = GeneratedField;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "expected one of: {:?}", &FIELDS)
                    }

                    #[allow(unused_variables)]
                    fn visit_str<E>(self, value: &str) -> std::result::Result<GeneratedField, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "var95" | "var_95" => Ok(GeneratedField::Var95),
                            "var99" | "var_99" => Ok(GeneratedField::Var99),
                            "var999" | "var_999" => Ok(GeneratedField::Var999),
                            "method" => Ok(GeneratedField::Method),
                            "horizonDays" | "horizon_days" => Ok(GeneratedField::HorizonDays),
                            "lookbackDays" | "lookback_days" => Ok(GeneratedField::LookbackDays),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ValueAtRisk;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct risk.v1.ValueAtRisk")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ValueAtRisk, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut var_95__ = None;
                let mut var_99__ = None;
                let mut var_999__ = None;
                let mut method__ = None;
                let mut horizon_days__ = None;
                let mut lookback_days__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Var95 => {
                            if var_95__.is_some() {
                                return Err(serde::de::Error::duplicate_field("var95"));
                            }
                            var_95__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Var99 => {
                            if var_99__.is_some() {
                                return Err(serde::de::Error::duplicate_field("var99"));
                            }
                            var_99__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Var999 => {
                            if var_999__.is_some() {
                                return Err(serde::de::Error::duplicate_field("var999"));
                            }
                            var_999__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Method => {
                            if method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("method"));
                            }
                            method__ = Some(map_.next_value::<VarMethod>()? as i32);
                        }
                        GeneratedField::HorizonDays => {
                            if horizon_days__.is_some() {
                                return Err(serde::de::Error::duplicate_field("horizonDays"));
                            }
                            horizon_days__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::LookbackDays => {
                            if lookback_days__.is_some() {
                                return Err(serde::de::Error::duplicate_field("lookbackDays"));
                            }
                            lookback_days__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                    }
                }
                Ok(ValueAtRisk {
                    var_95: var_95__.unwrap_or_default(),
                    var_99: var_99__.unwrap_or_default(),
                    var_999: var_999__.unwrap_or_default(),
                    method: method__.unwrap_or_default(),
                    horizon_days: horizon_days__.unwrap_or_default(),
                    lookback_days: lookback_days__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("risk.v1.ValueAtRisk", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for VarMethod {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "VAR_METHOD_UNSPECIFIED",
            Self::Historical => "VAR_METHOD_HISTORICAL",
            Self::Parametric => "VAR_METHOD_PARAMETRIC",
            Self::MonteCarlo => "VAR_METHOD_MONTE_CARLO",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for VarMethod {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "VAR_METHOD_UNSPECIFIED",
            "VAR_METHOD_HISTORICAL",
            "VAR_METHOD_PARAMETRIC",
            "VAR_METHOD_MONTE_CARLO",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = VarMethod;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "expected one of: {:?}", &FIELDS)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Signed(v), &self)
                    })
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(v)
                    .ok()
                    .and_then(|x| x.try_into().ok())
                    .ok_or_else(|| {
                        serde::de::Error::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                    })
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "VAR_METHOD_UNSPECIFIED" => Ok(VarMethod::Unspecified),
                    "VAR_METHOD_HISTORICAL" => Ok(VarMethod::Historical),
                    "VAR_METHOD_PARAMETRIC" => Ok(VarMethod::Parametric),
                    "VAR_METHOD_MONTE_CARLO" => Ok(VarMethod::MonteCarlo),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
