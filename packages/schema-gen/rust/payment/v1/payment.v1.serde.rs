// @generated
impl serde::Serialize for BankAccountDetails {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.account_number.is_empty() {
            len += 1;
        }
        if !self.ifsc_code.is_empty() {
            len += 1;
        }
        if !self.account_holder_name.is_empty() {
            len += 1;
        }
        if !self.bank_name.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.BankAccountDetails", len)?;
        if !self.account_number.is_empty() {
            struct_ser.serialize_field("accountNumber", &self.account_number)?;
        }
        if !self.ifsc_code.is_empty() {
            struct_ser.serialize_field("ifscCode", &self.ifsc_code)?;
        }
        if !self.account_holder_name.is_empty() {
            struct_ser.serialize_field("accountHolderName", &self.account_holder_name)?;
        }
        if !self.bank_name.is_empty() {
            struct_ser.serialize_field("bankName", &self.bank_name)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for BankAccountDetails {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "account_number",
            "accountNumber",
            "ifsc_code",
            "ifscCode",
            "account_holder_name",
            "accountHolderName",
            "bank_name",
            "bankName",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            AccountNumber,
            IfscCode,
            AccountHolderName,
            BankName,
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
                            "accountNumber" | "account_number" => Ok(GeneratedField::AccountNumber),
                            "ifscCode" | "ifsc_code" => Ok(GeneratedField::IfscCode),
                            "accountHolderName" | "account_holder_name" => Ok(GeneratedField::AccountHolderName),
                            "bankName" | "bank_name" => Ok(GeneratedField::BankName),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = BankAccountDetails;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.BankAccountDetails")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<BankAccountDetails, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut account_number__ = None;
                let mut ifsc_code__ = None;
                let mut account_holder_name__ = None;
                let mut bank_name__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::AccountNumber => {
                            if account_number__.is_some() {
                                return Err(serde::de::Error::duplicate_field("accountNumber"));
                            }
                            account_number__ = Some(map_.next_value()?);
                        }
                        GeneratedField::IfscCode => {
                            if ifsc_code__.is_some() {
                                return Err(serde::de::Error::duplicate_field("ifscCode"));
                            }
                            ifsc_code__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AccountHolderName => {
                            if account_holder_name__.is_some() {
                                return Err(serde::de::Error::duplicate_field("accountHolderName"));
                            }
                            account_holder_name__ = Some(map_.next_value()?);
                        }
                        GeneratedField::BankName => {
                            if bank_name__.is_some() {
                                return Err(serde::de::Error::duplicate_field("bankName"));
                            }
                            bank_name__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(BankAccountDetails {
                    account_number: account_number__.unwrap_or_default(),
                    ifsc_code: ifsc_code__.unwrap_or_default(),
                    account_holder_name: account_holder_name__.unwrap_or_default(),
                    bank_name: bank_name__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.BankAccountDetails", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for BillingInterval {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "BILLING_INTERVAL_UNSPECIFIED",
            Self::Monthly => "BILLING_INTERVAL_MONTHLY",
            Self::Quarterly => "BILLING_INTERVAL_QUARTERLY",
            Self::Yearly => "BILLING_INTERVAL_YEARLY",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for BillingInterval {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "BILLING_INTERVAL_UNSPECIFIED",
            "BILLING_INTERVAL_MONTHLY",
            "BILLING_INTERVAL_QUARTERLY",
            "BILLING_INTERVAL_YEARLY",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = BillingInterval;

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
                    "BILLING_INTERVAL_UNSPECIFIED" => Ok(BillingInterval::Unspecified),
                    "BILLING_INTERVAL_MONTHLY" => Ok(BillingInterval::Monthly),
                    "BILLING_INTERVAL_QUARTERLY" => Ok(BillingInterval::Quarterly),
                    "BILLING_INTERVAL_YEARLY" => Ok(BillingInterval::Yearly),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for CancelSubscriptionRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.subscription_id.is_empty() {
            len += 1;
        }
        if self.at_period_end {
            len += 1;
        }
        if !self.reason.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.CancelSubscriptionRequest", len)?;
        if !self.subscription_id.is_empty() {
            struct_ser.serialize_field("subscriptionId", &self.subscription_id)?;
        }
        if self.at_period_end {
            struct_ser.serialize_field("atPeriodEnd", &self.at_period_end)?;
        }
        if !self.reason.is_empty() {
            struct_ser.serialize_field("reason", &self.reason)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CancelSubscriptionRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscription_id",
            "subscriptionId",
            "at_period_end",
            "atPeriodEnd",
            "reason",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            SubscriptionId,
            AtPeriodEnd,
            Reason,
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
                            "subscriptionId" | "subscription_id" => Ok(GeneratedField::SubscriptionId),
                            "atPeriodEnd" | "at_period_end" => Ok(GeneratedField::AtPeriodEnd),
                            "reason" => Ok(GeneratedField::Reason),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CancelSubscriptionRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.CancelSubscriptionRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CancelSubscriptionRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscription_id__ = None;
                let mut at_period_end__ = None;
                let mut reason__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::SubscriptionId => {
                            if subscription_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscriptionId"));
                            }
                            subscription_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::AtPeriodEnd => {
                            if at_period_end__.is_some() {
                                return Err(serde::de::Error::duplicate_field("atPeriodEnd"));
                            }
                            at_period_end__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Reason => {
                            if reason__.is_some() {
                                return Err(serde::de::Error::duplicate_field("reason"));
                            }
                            reason__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(CancelSubscriptionRequest {
                    subscription_id: subscription_id__.unwrap_or_default(),
                    at_period_end: at_period_end__.unwrap_or_default(),
                    reason: reason__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.CancelSubscriptionRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CancelSubscriptionResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.subscription.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.CancelSubscriptionResponse", len)?;
        if let Some(v) = self.subscription.as_ref() {
            struct_ser.serialize_field("subscription", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CancelSubscriptionResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscription",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Subscription,
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
                            "subscription" => Ok(GeneratedField::Subscription),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CancelSubscriptionResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.CancelSubscriptionResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CancelSubscriptionResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscription__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Subscription => {
                            if subscription__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscription"));
                            }
                            subscription__ = map_.next_value()?;
                        }
                    }
                }
                Ok(CancelSubscriptionResponse {
                    subscription: subscription__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.CancelSubscriptionResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CardBrand {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "CARD_BRAND_UNSPECIFIED",
            Self::Visa => "CARD_BRAND_VISA",
            Self::Mastercard => "CARD_BRAND_MASTERCARD",
            Self::Amex => "CARD_BRAND_AMEX",
            Self::Rupay => "CARD_BRAND_RUPAY",
            Self::Diners => "CARD_BRAND_DINERS",
            Self::Discover => "CARD_BRAND_DISCOVER",
            Self::Jcb => "CARD_BRAND_JCB",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for CardBrand {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "CARD_BRAND_UNSPECIFIED",
            "CARD_BRAND_VISA",
            "CARD_BRAND_MASTERCARD",
            "CARD_BRAND_AMEX",
            "CARD_BRAND_RUPAY",
            "CARD_BRAND_DINERS",
            "CARD_BRAND_DISCOVER",
            "CARD_BRAND_JCB",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CardBrand;

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
                    "CARD_BRAND_UNSPECIFIED" => Ok(CardBrand::Unspecified),
                    "CARD_BRAND_VISA" => Ok(CardBrand::Visa),
                    "CARD_BRAND_MASTERCARD" => Ok(CardBrand::Mastercard),
                    "CARD_BRAND_AMEX" => Ok(CardBrand::Amex),
                    "CARD_BRAND_RUPAY" => Ok(CardBrand::Rupay),
                    "CARD_BRAND_DINERS" => Ok(CardBrand::Diners),
                    "CARD_BRAND_DISCOVER" => Ok(CardBrand::Discover),
                    "CARD_BRAND_JCB" => Ok(CardBrand::Jcb),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for CardDetails {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.card_number.is_empty() {
            len += 1;
        }
        if self.expiry_month != 0 {
            len += 1;
        }
        if self.expiry_year != 0 {
            len += 1;
        }
        if !self.cvv.is_empty() {
            len += 1;
        }
        if !self.cardholder_name.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.CardDetails", len)?;
        if !self.card_number.is_empty() {
            struct_ser.serialize_field("cardNumber", &self.card_number)?;
        }
        if self.expiry_month != 0 {
            struct_ser.serialize_field("expiryMonth", &self.expiry_month)?;
        }
        if self.expiry_year != 0 {
            struct_ser.serialize_field("expiryYear", &self.expiry_year)?;
        }
        if !self.cvv.is_empty() {
            struct_ser.serialize_field("cvv", &self.cvv)?;
        }
        if !self.cardholder_name.is_empty() {
            struct_ser.serialize_field("cardholderName", &self.cardholder_name)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CardDetails {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "card_number",
            "cardNumber",
            "expiry_month",
            "expiryMonth",
            "expiry_year",
            "expiryYear",
            "cvv",
            "cardholder_name",
            "cardholderName",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            CardNumber,
            ExpiryMonth,
            ExpiryYear,
            Cvv,
            CardholderName,
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
                            "cardNumber" | "card_number" => Ok(GeneratedField::CardNumber),
                            "expiryMonth" | "expiry_month" => Ok(GeneratedField::ExpiryMonth),
                            "expiryYear" | "expiry_year" => Ok(GeneratedField::ExpiryYear),
                            "cvv" => Ok(GeneratedField::Cvv),
                            "cardholderName" | "cardholder_name" => Ok(GeneratedField::CardholderName),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CardDetails;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.CardDetails")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CardDetails, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut card_number__ = None;
                let mut expiry_month__ = None;
                let mut expiry_year__ = None;
                let mut cvv__ = None;
                let mut cardholder_name__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::CardNumber => {
                            if card_number__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cardNumber"));
                            }
                            card_number__ = Some(map_.next_value()?);
                        }
                        GeneratedField::ExpiryMonth => {
                            if expiry_month__.is_some() {
                                return Err(serde::de::Error::duplicate_field("expiryMonth"));
                            }
                            expiry_month__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::ExpiryYear => {
                            if expiry_year__.is_some() {
                                return Err(serde::de::Error::duplicate_field("expiryYear"));
                            }
                            expiry_year__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Cvv => {
                            if cvv__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cvv"));
                            }
                            cvv__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CardholderName => {
                            if cardholder_name__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cardholderName"));
                            }
                            cardholder_name__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(CardDetails {
                    card_number: card_number__.unwrap_or_default(),
                    expiry_month: expiry_month__.unwrap_or_default(),
                    expiry_year: expiry_year__.unwrap_or_default(),
                    cvv: cvv__.unwrap_or_default(),
                    cardholder_name: cardholder_name__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.CardDetails", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CreatePaymentRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.customer_id.is_empty() {
            len += 1;
        }
        if self.amount != 0. {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if self.method.is_some() {
            len += 1;
        }
        if !self.description.is_empty() {
            len += 1;
        }
        if !self.metadata.is_empty() {
            len += 1;
        }
        if !self.idempotency_key.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.CreatePaymentRequest", len)?;
        if !self.customer_id.is_empty() {
            struct_ser.serialize_field("customerId", &self.customer_id)?;
        }
        if self.amount != 0. {
            struct_ser.serialize_field("amount", &self.amount)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if let Some(v) = self.method.as_ref() {
            struct_ser.serialize_field("method", v)?;
        }
        if !self.description.is_empty() {
            struct_ser.serialize_field("description", &self.description)?;
        }
        if !self.metadata.is_empty() {
            struct_ser.serialize_field("metadata", &self.metadata)?;
        }
        if !self.idempotency_key.is_empty() {
            struct_ser.serialize_field("idempotencyKey", &self.idempotency_key)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CreatePaymentRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "customer_id",
            "customerId",
            "amount",
            "currency",
            "method",
            "description",
            "metadata",
            "idempotency_key",
            "idempotencyKey",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            CustomerId,
            Amount,
            Currency,
            Method,
            Description,
            Metadata,
            IdempotencyKey,
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
                            "customerId" | "customer_id" => Ok(GeneratedField::CustomerId),
                            "amount" => Ok(GeneratedField::Amount),
                            "currency" => Ok(GeneratedField::Currency),
                            "method" => Ok(GeneratedField::Method),
                            "description" => Ok(GeneratedField::Description),
                            "metadata" => Ok(GeneratedField::Metadata),
                            "idempotencyKey" | "idempotency_key" => Ok(GeneratedField::IdempotencyKey),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CreatePaymentRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.CreatePaymentRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CreatePaymentRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut customer_id__ = None;
                let mut amount__ = None;
                let mut currency__ = None;
                let mut method__ = None;
                let mut description__ = None;
                let mut metadata__ = None;
                let mut idempotency_key__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::CustomerId => {
                            if customer_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("customerId"));
                            }
                            customer_id__ = Some(map_.next_value()?);
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
                        GeneratedField::Method => {
                            if method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("method"));
                            }
                            method__ = map_.next_value()?;
                        }
                        GeneratedField::Description => {
                            if description__.is_some() {
                                return Err(serde::de::Error::duplicate_field("description"));
                            }
                            description__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Metadata => {
                            if metadata__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metadata"));
                            }
                            metadata__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, _>>()?
                            );
                        }
                        GeneratedField::IdempotencyKey => {
                            if idempotency_key__.is_some() {
                                return Err(serde::de::Error::duplicate_field("idempotencyKey"));
                            }
                            idempotency_key__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(CreatePaymentRequest {
                    customer_id: customer_id__.unwrap_or_default(),
                    amount: amount__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    method: method__,
                    description: description__.unwrap_or_default(),
                    metadata: metadata__.unwrap_or_default(),
                    idempotency_key: idempotency_key__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.CreatePaymentRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CreatePaymentResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.payment.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.CreatePaymentResponse", len)?;
        if let Some(v) = self.payment.as_ref() {
            struct_ser.serialize_field("payment", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CreatePaymentResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "payment",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Payment,
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
                            "payment" => Ok(GeneratedField::Payment),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CreatePaymentResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.CreatePaymentResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CreatePaymentResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut payment__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Payment => {
                            if payment__.is_some() {
                                return Err(serde::de::Error::duplicate_field("payment"));
                            }
                            payment__ = map_.next_value()?;
                        }
                    }
                }
                Ok(CreatePaymentResponse {
                    payment: payment__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.CreatePaymentResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CreateSubscriptionRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.customer_id.is_empty() {
            len += 1;
        }
        if !self.plan_id.is_empty() {
            len += 1;
        }
        if self.tier != 0 {
            len += 1;
        }
        if self.billing_interval != 0 {
            len += 1;
        }
        if self.amount != 0. {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if self.payment_method.is_some() {
            len += 1;
        }
        if self.trial_days != 0 {
            len += 1;
        }
        if !self.metadata.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.CreateSubscriptionRequest", len)?;
        if !self.customer_id.is_empty() {
            struct_ser.serialize_field("customerId", &self.customer_id)?;
        }
        if !self.plan_id.is_empty() {
            struct_ser.serialize_field("planId", &self.plan_id)?;
        }
        if self.tier != 0 {
            let v = SubscriptionTier::try_from(self.tier)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.tier)))?;
            struct_ser.serialize_field("tier", &v)?;
        }
        if self.billing_interval != 0 {
            let v = BillingInterval::try_from(self.billing_interval)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.billing_interval)))?;
            struct_ser.serialize_field("billingInterval", &v)?;
        }
        if self.amount != 0. {
            struct_ser.serialize_field("amount", &self.amount)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if let Some(v) = self.payment_method.as_ref() {
            struct_ser.serialize_field("paymentMethod", v)?;
        }
        if self.trial_days != 0 {
            struct_ser.serialize_field("trialDays", &self.trial_days)?;
        }
        if !self.metadata.is_empty() {
            struct_ser.serialize_field("metadata", &self.metadata)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CreateSubscriptionRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "customer_id",
            "customerId",
            "plan_id",
            "planId",
            "tier",
            "billing_interval",
            "billingInterval",
            "amount",
            "currency",
            "payment_method",
            "paymentMethod",
            "trial_days",
            "trialDays",
            "metadata",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            CustomerId,
            PlanId,
            Tier,
            BillingInterval,
            Amount,
            Currency,
            PaymentMethod,
            TrialDays,
            Metadata,
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
                            "customerId" | "customer_id" => Ok(GeneratedField::CustomerId),
                            "planId" | "plan_id" => Ok(GeneratedField::PlanId),
                            "tier" => Ok(GeneratedField::Tier),
                            "billingInterval" | "billing_interval" => Ok(GeneratedField::BillingInterval),
                            "amount" => Ok(GeneratedField::Amount),
                            "currency" => Ok(GeneratedField::Currency),
                            "paymentMethod" | "payment_method" => Ok(GeneratedField::PaymentMethod),
                            "trialDays" | "trial_days" => Ok(GeneratedField::TrialDays),
                            "metadata" => Ok(GeneratedField::Metadata),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CreateSubscriptionRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.CreateSubscriptionRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CreateSubscriptionRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut customer_id__ = None;
                let mut plan_id__ = None;
                let mut tier__ = None;
                let mut billing_interval__ = None;
                let mut amount__ = None;
                let mut currency__ = None;
                let mut payment_method__ = None;
                let mut trial_days__ = None;
                let mut metadata__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::CustomerId => {
                            if customer_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("customerId"));
                            }
                            customer_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::PlanId => {
                            if plan_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("planId"));
                            }
                            plan_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Tier => {
                            if tier__.is_some() {
                                return Err(serde::de::Error::duplicate_field("tier"));
                            }
                            tier__ = Some(map_.next_value::<SubscriptionTier>()? as i32);
                        }
                        GeneratedField::BillingInterval => {
                            if billing_interval__.is_some() {
                                return Err(serde::de::Error::duplicate_field("billingInterval"));
                            }
                            billing_interval__ = Some(map_.next_value::<BillingInterval>()? as i32);
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
                        GeneratedField::PaymentMethod => {
                            if payment_method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentMethod"));
                            }
                            payment_method__ = map_.next_value()?;
                        }
                        GeneratedField::TrialDays => {
                            if trial_days__.is_some() {
                                return Err(serde::de::Error::duplicate_field("trialDays"));
                            }
                            trial_days__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Metadata => {
                            if metadata__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metadata"));
                            }
                            metadata__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, _>>()?
                            );
                        }
                    }
                }
                Ok(CreateSubscriptionRequest {
                    customer_id: customer_id__.unwrap_or_default(),
                    plan_id: plan_id__.unwrap_or_default(),
                    tier: tier__.unwrap_or_default(),
                    billing_interval: billing_interval__.unwrap_or_default(),
                    amount: amount__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    payment_method: payment_method__,
                    trial_days: trial_days__.unwrap_or_default(),
                    metadata: metadata__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.CreateSubscriptionRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for CreateSubscriptionResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.subscription.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.CreateSubscriptionResponse", len)?;
        if let Some(v) = self.subscription.as_ref() {
            struct_ser.serialize_field("subscription", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for CreateSubscriptionResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscription",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Subscription,
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
                            "subscription" => Ok(GeneratedField::Subscription),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = CreateSubscriptionResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.CreateSubscriptionResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<CreateSubscriptionResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscription__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Subscription => {
                            if subscription__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscription"));
                            }
                            subscription__ = map_.next_value()?;
                        }
                    }
                }
                Ok(CreateSubscriptionResponse {
                    subscription: subscription__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.CreateSubscriptionResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetPaymentRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.payment_id.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.GetPaymentRequest", len)?;
        if !self.payment_id.is_empty() {
            struct_ser.serialize_field("paymentId", &self.payment_id)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetPaymentRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "payment_id",
            "paymentId",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PaymentId,
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
                            "paymentId" | "payment_id" => Ok(GeneratedField::PaymentId),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetPaymentRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.GetPaymentRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetPaymentRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut payment_id__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PaymentId => {
                            if payment_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentId"));
                            }
                            payment_id__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetPaymentRequest {
                    payment_id: payment_id__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.GetPaymentRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetPaymentResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.payment.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.GetPaymentResponse", len)?;
        if let Some(v) = self.payment.as_ref() {
            struct_ser.serialize_field("payment", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetPaymentResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "payment",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Payment,
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
                            "payment" => Ok(GeneratedField::Payment),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetPaymentResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.GetPaymentResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetPaymentResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut payment__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Payment => {
                            if payment__.is_some() {
                                return Err(serde::de::Error::duplicate_field("payment"));
                            }
                            payment__ = map_.next_value()?;
                        }
                    }
                }
                Ok(GetPaymentResponse {
                    payment: payment__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.GetPaymentResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetSubscriptionRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.subscription_id.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.GetSubscriptionRequest", len)?;
        if !self.subscription_id.is_empty() {
            struct_ser.serialize_field("subscriptionId", &self.subscription_id)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetSubscriptionRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscription_id",
            "subscriptionId",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            SubscriptionId,
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
                            "subscriptionId" | "subscription_id" => Ok(GeneratedField::SubscriptionId),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetSubscriptionRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.GetSubscriptionRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetSubscriptionRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscription_id__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::SubscriptionId => {
                            if subscription_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscriptionId"));
                            }
                            subscription_id__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(GetSubscriptionRequest {
                    subscription_id: subscription_id__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.GetSubscriptionRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for GetSubscriptionResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.subscription.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.GetSubscriptionResponse", len)?;
        if let Some(v) = self.subscription.as_ref() {
            struct_ser.serialize_field("subscription", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for GetSubscriptionResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscription",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Subscription,
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
                            "subscription" => Ok(GeneratedField::Subscription),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = GetSubscriptionResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.GetSubscriptionResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<GetSubscriptionResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscription__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Subscription => {
                            if subscription__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscription"));
                            }
                            subscription__ = map_.next_value()?;
                        }
                    }
                }
                Ok(GetSubscriptionResponse {
                    subscription: subscription__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.GetSubscriptionResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ListPaymentsRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.customer_id.is_empty() {
            len += 1;
        }
        if self.status != 0 {
            len += 1;
        }
        if self.page_size != 0 {
            len += 1;
        }
        if !self.page_token.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.ListPaymentsRequest", len)?;
        if !self.customer_id.is_empty() {
            struct_ser.serialize_field("customerId", &self.customer_id)?;
        }
        if self.status != 0 {
            let v = PaymentStatus::try_from(self.status)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.status)))?;
            struct_ser.serialize_field("status", &v)?;
        }
        if self.page_size != 0 {
            struct_ser.serialize_field("pageSize", &self.page_size)?;
        }
        if !self.page_token.is_empty() {
            struct_ser.serialize_field("pageToken", &self.page_token)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ListPaymentsRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "customer_id",
            "customerId",
            "status",
            "page_size",
            "pageSize",
            "page_token",
            "pageToken",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            CustomerId,
            Status,
            PageSize,
            PageToken,
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
                            "customerId" | "customer_id" => Ok(GeneratedField::CustomerId),
                            "status" => Ok(GeneratedField::Status),
                            "pageSize" | "page_size" => Ok(GeneratedField::PageSize),
                            "pageToken" | "page_token" => Ok(GeneratedField::PageToken),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ListPaymentsRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.ListPaymentsRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ListPaymentsRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut customer_id__ = None;
                let mut status__ = None;
                let mut page_size__ = None;
                let mut page_token__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::CustomerId => {
                            if customer_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("customerId"));
                            }
                            customer_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = Some(map_.next_value::<PaymentStatus>()? as i32);
                        }
                        GeneratedField::PageSize => {
                            if page_size__.is_some() {
                                return Err(serde::de::Error::duplicate_field("pageSize"));
                            }
                            page_size__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::PageToken => {
                            if page_token__.is_some() {
                                return Err(serde::de::Error::duplicate_field("pageToken"));
                            }
                            page_token__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ListPaymentsRequest {
                    customer_id: customer_id__.unwrap_or_default(),
                    status: status__.unwrap_or_default(),
                    page_size: page_size__.unwrap_or_default(),
                    page_token: page_token__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.ListPaymentsRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ListPaymentsResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.payments.is_empty() {
            len += 1;
        }
        if !self.next_page_token.is_empty() {
            len += 1;
        }
        if self.total_count != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.ListPaymentsResponse", len)?;
        if !self.payments.is_empty() {
            struct_ser.serialize_field("payments", &self.payments)?;
        }
        if !self.next_page_token.is_empty() {
            struct_ser.serialize_field("nextPageToken", &self.next_page_token)?;
        }
        if self.total_count != 0 {
            struct_ser.serialize_field("totalCount", &self.total_count)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ListPaymentsResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "payments",
            "next_page_token",
            "nextPageToken",
            "total_count",
            "totalCount",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Payments,
            NextPageToken,
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
                            "payments" => Ok(GeneratedField::Payments),
                            "nextPageToken" | "next_page_token" => Ok(GeneratedField::NextPageToken),
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
            type Value = ListPaymentsResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.ListPaymentsResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ListPaymentsResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut payments__ = None;
                let mut next_page_token__ = None;
                let mut total_count__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Payments => {
                            if payments__.is_some() {
                                return Err(serde::de::Error::duplicate_field("payments"));
                            }
                            payments__ = Some(map_.next_value()?);
                        }
                        GeneratedField::NextPageToken => {
                            if next_page_token__.is_some() {
                                return Err(serde::de::Error::duplicate_field("nextPageToken"));
                            }
                            next_page_token__ = Some(map_.next_value()?);
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
                Ok(ListPaymentsResponse {
                    payments: payments__.unwrap_or_default(),
                    next_page_token: next_page_token__.unwrap_or_default(),
                    total_count: total_count__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.ListPaymentsResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ListSubscriptionsRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.customer_id.is_empty() {
            len += 1;
        }
        if self.status != 0 {
            len += 1;
        }
        if self.page_size != 0 {
            len += 1;
        }
        if !self.page_token.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.ListSubscriptionsRequest", len)?;
        if !self.customer_id.is_empty() {
            struct_ser.serialize_field("customerId", &self.customer_id)?;
        }
        if self.status != 0 {
            let v = SubscriptionStatus::try_from(self.status)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.status)))?;
            struct_ser.serialize_field("status", &v)?;
        }
        if self.page_size != 0 {
            struct_ser.serialize_field("pageSize", &self.page_size)?;
        }
        if !self.page_token.is_empty() {
            struct_ser.serialize_field("pageToken", &self.page_token)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ListSubscriptionsRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "customer_id",
            "customerId",
            "status",
            "page_size",
            "pageSize",
            "page_token",
            "pageToken",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            CustomerId,
            Status,
            PageSize,
            PageToken,
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
                            "customerId" | "customer_id" => Ok(GeneratedField::CustomerId),
                            "status" => Ok(GeneratedField::Status),
                            "pageSize" | "page_size" => Ok(GeneratedField::PageSize),
                            "pageToken" | "page_token" => Ok(GeneratedField::PageToken),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ListSubscriptionsRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.ListSubscriptionsRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ListSubscriptionsRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut customer_id__ = None;
                let mut status__ = None;
                let mut page_size__ = None;
                let mut page_token__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::CustomerId => {
                            if customer_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("customerId"));
                            }
                            customer_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = Some(map_.next_value::<SubscriptionStatus>()? as i32);
                        }
                        GeneratedField::PageSize => {
                            if page_size__.is_some() {
                                return Err(serde::de::Error::duplicate_field("pageSize"));
                            }
                            page_size__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::PageToken => {
                            if page_token__.is_some() {
                                return Err(serde::de::Error::duplicate_field("pageToken"));
                            }
                            page_token__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ListSubscriptionsRequest {
                    customer_id: customer_id__.unwrap_or_default(),
                    status: status__.unwrap_or_default(),
                    page_size: page_size__.unwrap_or_default(),
                    page_token: page_token__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.ListSubscriptionsRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ListSubscriptionsResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.subscriptions.is_empty() {
            len += 1;
        }
        if !self.next_page_token.is_empty() {
            len += 1;
        }
        if self.total_count != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.ListSubscriptionsResponse", len)?;
        if !self.subscriptions.is_empty() {
            struct_ser.serialize_field("subscriptions", &self.subscriptions)?;
        }
        if !self.next_page_token.is_empty() {
            struct_ser.serialize_field("nextPageToken", &self.next_page_token)?;
        }
        if self.total_count != 0 {
            struct_ser.serialize_field("totalCount", &self.total_count)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ListSubscriptionsResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscriptions",
            "next_page_token",
            "nextPageToken",
            "total_count",
            "totalCount",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Subscriptions,
            NextPageToken,
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
                            "subscriptions" => Ok(GeneratedField::Subscriptions),
                            "nextPageToken" | "next_page_token" => Ok(GeneratedField::NextPageToken),
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
            type Value = ListSubscriptionsResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.ListSubscriptionsResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ListSubscriptionsResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscriptions__ = None;
                let mut next_page_token__ = None;
                let mut total_count__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Subscriptions => {
                            if subscriptions__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscriptions"));
                            }
                            subscriptions__ = Some(map_.next_value()?);
                        }
                        GeneratedField::NextPageToken => {
                            if next_page_token__.is_some() {
                                return Err(serde::de::Error::duplicate_field("nextPageToken"));
                            }
                            next_page_token__ = Some(map_.next_value()?);
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
                Ok(ListSubscriptionsResponse {
                    subscriptions: subscriptions__.unwrap_or_default(),
                    next_page_token: next_page_token__.unwrap_or_default(),
                    total_count: total_count__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.ListSubscriptionsResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for Payment {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.payment_id.is_empty() {
            len += 1;
        }
        if !self.customer_id.is_empty() {
            len += 1;
        }
        if self.amount != 0. {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if self.status != 0 {
            len += 1;
        }
        if self.method.is_some() {
            len += 1;
        }
        if !self.description.is_empty() {
            len += 1;
        }
        if !self.metadata.is_empty() {
            len += 1;
        }
        if !self.gateway_reference.is_empty() {
            len += 1;
        }
        if !self.failure_reason.is_empty() {
            len += 1;
        }
        if self.refunded_amount != 0. {
            len += 1;
        }
        if !self.idempotency_key.is_empty() {
            len += 1;
        }
        if !self.created_at.is_empty() {
            len += 1;
        }
        if !self.updated_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.Payment", len)?;
        if !self.payment_id.is_empty() {
            struct_ser.serialize_field("paymentId", &self.payment_id)?;
        }
        if !self.customer_id.is_empty() {
            struct_ser.serialize_field("customerId", &self.customer_id)?;
        }
        if self.amount != 0. {
            struct_ser.serialize_field("amount", &self.amount)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if self.status != 0 {
            let v = PaymentStatus::try_from(self.status)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.status)))?;
            struct_ser.serialize_field("status", &v)?;
        }
        if let Some(v) = self.method.as_ref() {
            struct_ser.serialize_field("method", v)?;
        }
        if !self.description.is_empty() {
            struct_ser.serialize_field("description", &self.description)?;
        }
        if !self.metadata.is_empty() {
            struct_ser.serialize_field("metadata", &self.metadata)?;
        }
        if !self.gateway_reference.is_empty() {
            struct_ser.serialize_field("gatewayReference", &self.gateway_reference)?;
        }
        if !self.failure_reason.is_empty() {
            struct_ser.serialize_field("failureReason", &self.failure_reason)?;
        }
        if self.refunded_amount != 0. {
            struct_ser.serialize_field("refundedAmount", &self.refunded_amount)?;
        }
        if !self.idempotency_key.is_empty() {
            struct_ser.serialize_field("idempotencyKey", &self.idempotency_key)?;
        }
        if !self.created_at.is_empty() {
            struct_ser.serialize_field("createdAt", &self.created_at)?;
        }
        if !self.updated_at.is_empty() {
            struct_ser.serialize_field("updatedAt", &self.updated_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for Payment {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "payment_id",
            "paymentId",
            "customer_id",
            "customerId",
            "amount",
            "currency",
            "status",
            "method",
            "description",
            "metadata",
            "gateway_reference",
            "gatewayReference",
            "failure_reason",
            "failureReason",
            "refunded_amount",
            "refundedAmount",
            "idempotency_key",
            "idempotencyKey",
            "created_at",
            "createdAt",
            "updated_at",
            "updatedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PaymentId,
            CustomerId,
            Amount,
            Currency,
            Status,
            Method,
            Description,
            Metadata,
            GatewayReference,
            FailureReason,
            RefundedAmount,
            IdempotencyKey,
            CreatedAt,
            UpdatedAt,
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
                            "paymentId" | "payment_id" => Ok(GeneratedField::PaymentId),
                            "customerId" | "customer_id" => Ok(GeneratedField::CustomerId),
                            "amount" => Ok(GeneratedField::Amount),
                            "currency" => Ok(GeneratedField::Currency),
                            "status" => Ok(GeneratedField::Status),
                            "method" => Ok(GeneratedField::Method),
                            "description" => Ok(GeneratedField::Description),
                            "metadata" => Ok(GeneratedField::Metadata),
                            "gatewayReference" | "gateway_reference" => Ok(GeneratedField::GatewayReference),
                            "failureReason" | "failure_reason" => Ok(GeneratedField::FailureReason),
                            "refundedAmount" | "refunded_amount" => Ok(GeneratedField::RefundedAmount),
                            "idempotencyKey" | "idempotency_key" => Ok(GeneratedField::IdempotencyKey),
                            "createdAt" | "created_at" => Ok(GeneratedField::CreatedAt),
                            "updatedAt" | "updated_at" => Ok(GeneratedField::UpdatedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = Payment;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.Payment")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<Payment, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut payment_id__ = None;
                let mut customer_id__ = None;
                let mut amount__ = None;
                let mut currency__ = None;
                let mut status__ = None;
                let mut method__ = None;
                let mut description__ = None;
                let mut metadata__ = None;
                let mut gateway_reference__ = None;
                let mut failure_reason__ = None;
                let mut refunded_amount__ = None;
                let mut idempotency_key__ = None;
                let mut created_at__ = None;
                let mut updated_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PaymentId => {
                            if payment_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentId"));
                            }
                            payment_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CustomerId => {
                            if customer_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("customerId"));
                            }
                            customer_id__ = Some(map_.next_value()?);
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
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = Some(map_.next_value::<PaymentStatus>()? as i32);
                        }
                        GeneratedField::Method => {
                            if method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("method"));
                            }
                            method__ = map_.next_value()?;
                        }
                        GeneratedField::Description => {
                            if description__.is_some() {
                                return Err(serde::de::Error::duplicate_field("description"));
                            }
                            description__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Metadata => {
                            if metadata__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metadata"));
                            }
                            metadata__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, _>>()?
                            );
                        }
                        GeneratedField::GatewayReference => {
                            if gateway_reference__.is_some() {
                                return Err(serde::de::Error::duplicate_field("gatewayReference"));
                            }
                            gateway_reference__ = Some(map_.next_value()?);
                        }
                        GeneratedField::FailureReason => {
                            if failure_reason__.is_some() {
                                return Err(serde::de::Error::duplicate_field("failureReason"));
                            }
                            failure_reason__ = Some(map_.next_value()?);
                        }
                        GeneratedField::RefundedAmount => {
                            if refunded_amount__.is_some() {
                                return Err(serde::de::Error::duplicate_field("refundedAmount"));
                            }
                            refunded_amount__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::IdempotencyKey => {
                            if idempotency_key__.is_some() {
                                return Err(serde::de::Error::duplicate_field("idempotencyKey"));
                            }
                            idempotency_key__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CreatedAt => {
                            if created_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("createdAt"));
                            }
                            created_at__ = Some(map_.next_value()?);
                        }
                        GeneratedField::UpdatedAt => {
                            if updated_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("updatedAt"));
                            }
                            updated_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(Payment {
                    payment_id: payment_id__.unwrap_or_default(),
                    customer_id: customer_id__.unwrap_or_default(),
                    amount: amount__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    status: status__.unwrap_or_default(),
                    method: method__,
                    description: description__.unwrap_or_default(),
                    metadata: metadata__.unwrap_or_default(),
                    gateway_reference: gateway_reference__.unwrap_or_default(),
                    failure_reason: failure_reason__.unwrap_or_default(),
                    refunded_amount: refunded_amount__.unwrap_or_default(),
                    idempotency_key: idempotency_key__.unwrap_or_default(),
                    created_at: created_at__.unwrap_or_default(),
                    updated_at: updated_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.Payment", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for PaymentMethod {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.method_type != 0 {
            len += 1;
        }
        if self.card.is_some() {
            len += 1;
        }
        if self.upi.is_some() {
            len += 1;
        }
        if self.bank_account.is_some() {
            len += 1;
        }
        if self.wallet.is_some() {
            len += 1;
        }
        if !self.token.is_empty() {
            len += 1;
        }
        if !self.last4.is_empty() {
            len += 1;
        }
        if self.card_brand != 0 {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.PaymentMethod", len)?;
        if self.method_type != 0 {
            let v = PaymentMethodType::try_from(self.method_type)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.method_type)))?;
            struct_ser.serialize_field("methodType", &v)?;
        }
        if let Some(v) = self.card.as_ref() {
            struct_ser.serialize_field("card", v)?;
        }
        if let Some(v) = self.upi.as_ref() {
            struct_ser.serialize_field("upi", v)?;
        }
        if let Some(v) = self.bank_account.as_ref() {
            struct_ser.serialize_field("bankAccount", v)?;
        }
        if let Some(v) = self.wallet.as_ref() {
            struct_ser.serialize_field("wallet", v)?;
        }
        if !self.token.is_empty() {
            struct_ser.serialize_field("token", &self.token)?;
        }
        if !self.last4.is_empty() {
            struct_ser.serialize_field("last4", &self.last4)?;
        }
        if self.card_brand != 0 {
            let v = CardBrand::try_from(self.card_brand)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.card_brand)))?;
            struct_ser.serialize_field("cardBrand", &v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for PaymentMethod {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "method_type",
            "methodType",
            "card",
            "upi",
            "bank_account",
            "bankAccount",
            "wallet",
            "token",
            "last4",
            "card_brand",
            "cardBrand",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            MethodType,
            Card,
            Upi,
            BankAccount,
            Wallet,
            Token,
            Last4,
            CardBrand,
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
                            "methodType" | "method_type" => Ok(GeneratedField::MethodType),
                            "card" => Ok(GeneratedField::Card),
                            "upi" => Ok(GeneratedField::Upi),
                            "bankAccount" | "bank_account" => Ok(GeneratedField::BankAccount),
                            "wallet" => Ok(GeneratedField::Wallet),
                            "token" => Ok(GeneratedField::Token),
                            "last4" => Ok(GeneratedField::Last4),
                            "cardBrand" | "card_brand" => Ok(GeneratedField::CardBrand),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = PaymentMethod;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.PaymentMethod")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<PaymentMethod, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut method_type__ = None;
                let mut card__ = None;
                let mut upi__ = None;
                let mut bank_account__ = None;
                let mut wallet__ = None;
                let mut token__ = None;
                let mut last4__ = None;
                let mut card_brand__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::MethodType => {
                            if method_type__.is_some() {
                                return Err(serde::de::Error::duplicate_field("methodType"));
                            }
                            method_type__ = Some(map_.next_value::<PaymentMethodType>()? as i32);
                        }
                        GeneratedField::Card => {
                            if card__.is_some() {
                                return Err(serde::de::Error::duplicate_field("card"));
                            }
                            card__ = map_.next_value()?;
                        }
                        GeneratedField::Upi => {
                            if upi__.is_some() {
                                return Err(serde::de::Error::duplicate_field("upi"));
                            }
                            upi__ = map_.next_value()?;
                        }
                        GeneratedField::BankAccount => {
                            if bank_account__.is_some() {
                                return Err(serde::de::Error::duplicate_field("bankAccount"));
                            }
                            bank_account__ = map_.next_value()?;
                        }
                        GeneratedField::Wallet => {
                            if wallet__.is_some() {
                                return Err(serde::de::Error::duplicate_field("wallet"));
                            }
                            wallet__ = map_.next_value()?;
                        }
                        GeneratedField::Token => {
                            if token__.is_some() {
                                return Err(serde::de::Error::duplicate_field("token"));
                            }
                            token__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Last4 => {
                            if last4__.is_some() {
                                return Err(serde::de::Error::duplicate_field("last4"));
                            }
                            last4__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CardBrand => {
                            if card_brand__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cardBrand"));
                            }
                            card_brand__ = Some(map_.next_value::<CardBrand>()? as i32);
                        }
                    }
                }
                Ok(PaymentMethod {
                    method_type: method_type__.unwrap_or_default(),
                    card: card__,
                    upi: upi__,
                    bank_account: bank_account__,
                    wallet: wallet__,
                    token: token__.unwrap_or_default(),
                    last4: last4__.unwrap_or_default(),
                    card_brand: card_brand__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.PaymentMethod", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for PaymentMethodType {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "PAYMENT_METHOD_TYPE_UNSPECIFIED",
            Self::Card => "PAYMENT_METHOD_TYPE_CARD",
            Self::Upi => "PAYMENT_METHOD_TYPE_UPI",
            Self::Netbanking => "PAYMENT_METHOD_TYPE_NETBANKING",
            Self::Wallet => "PAYMENT_METHOD_TYPE_WALLET",
            Self::BankTransfer => "PAYMENT_METHOD_TYPE_BANK_TRANSFER",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for PaymentMethodType {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "PAYMENT_METHOD_TYPE_UNSPECIFIED",
            "PAYMENT_METHOD_TYPE_CARD",
            "PAYMENT_METHOD_TYPE_UPI",
            "PAYMENT_METHOD_TYPE_NETBANKING",
            "PAYMENT_METHOD_TYPE_WALLET",
            "PAYMENT_METHOD_TYPE_BANK_TRANSFER",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = PaymentMethodType;

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
                    "PAYMENT_METHOD_TYPE_UNSPECIFIED" => Ok(PaymentMethodType::Unspecified),
                    "PAYMENT_METHOD_TYPE_CARD" => Ok(PaymentMethodType::Card),
                    "PAYMENT_METHOD_TYPE_UPI" => Ok(PaymentMethodType::Upi),
                    "PAYMENT_METHOD_TYPE_NETBANKING" => Ok(PaymentMethodType::Netbanking),
                    "PAYMENT_METHOD_TYPE_WALLET" => Ok(PaymentMethodType::Wallet),
                    "PAYMENT_METHOD_TYPE_BANK_TRANSFER" => Ok(PaymentMethodType::BankTransfer),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for PaymentStatus {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "PAYMENT_STATUS_UNSPECIFIED",
            Self::Pending => "PAYMENT_STATUS_PENDING",
            Self::Processing => "PAYMENT_STATUS_PROCESSING",
            Self::Succeeded => "PAYMENT_STATUS_SUCCEEDED",
            Self::Failed => "PAYMENT_STATUS_FAILED",
            Self::Cancelled => "PAYMENT_STATUS_CANCELLED",
            Self::Refunded => "PAYMENT_STATUS_REFUNDED",
            Self::PartiallyRefunded => "PAYMENT_STATUS_PARTIALLY_REFUNDED",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for PaymentStatus {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "PAYMENT_STATUS_UNSPECIFIED",
            "PAYMENT_STATUS_PENDING",
            "PAYMENT_STATUS_PROCESSING",
            "PAYMENT_STATUS_SUCCEEDED",
            "PAYMENT_STATUS_FAILED",
            "PAYMENT_STATUS_CANCELLED",
            "PAYMENT_STATUS_REFUNDED",
            "PAYMENT_STATUS_PARTIALLY_REFUNDED",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = PaymentStatus;

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
                    "PAYMENT_STATUS_UNSPECIFIED" => Ok(PaymentStatus::Unspecified),
                    "PAYMENT_STATUS_PENDING" => Ok(PaymentStatus::Pending),
                    "PAYMENT_STATUS_PROCESSING" => Ok(PaymentStatus::Processing),
                    "PAYMENT_STATUS_SUCCEEDED" => Ok(PaymentStatus::Succeeded),
                    "PAYMENT_STATUS_FAILED" => Ok(PaymentStatus::Failed),
                    "PAYMENT_STATUS_CANCELLED" => Ok(PaymentStatus::Cancelled),
                    "PAYMENT_STATUS_REFUNDED" => Ok(PaymentStatus::Refunded),
                    "PAYMENT_STATUS_PARTIALLY_REFUNDED" => Ok(PaymentStatus::PartiallyRefunded),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for ProcessPaymentRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.payment_id.is_empty() {
            len += 1;
        }
        if self.method.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.ProcessPaymentRequest", len)?;
        if !self.payment_id.is_empty() {
            struct_ser.serialize_field("paymentId", &self.payment_id)?;
        }
        if let Some(v) = self.method.as_ref() {
            struct_ser.serialize_field("method", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ProcessPaymentRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "payment_id",
            "paymentId",
            "method",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PaymentId,
            Method,
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
                            "paymentId" | "payment_id" => Ok(GeneratedField::PaymentId),
                            "method" => Ok(GeneratedField::Method),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ProcessPaymentRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.ProcessPaymentRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ProcessPaymentRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut payment_id__ = None;
                let mut method__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PaymentId => {
                            if payment_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentId"));
                            }
                            payment_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Method => {
                            if method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("method"));
                            }
                            method__ = map_.next_value()?;
                        }
                    }
                }
                Ok(ProcessPaymentRequest {
                    payment_id: payment_id__.unwrap_or_default(),
                    method: method__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.ProcessPaymentRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ProcessPaymentResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.payment.is_some() {
            len += 1;
        }
        if self.success {
            len += 1;
        }
        if !self.message.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.ProcessPaymentResponse", len)?;
        if let Some(v) = self.payment.as_ref() {
            struct_ser.serialize_field("payment", v)?;
        }
        if self.success {
            struct_ser.serialize_field("success", &self.success)?;
        }
        if !self.message.is_empty() {
            struct_ser.serialize_field("message", &self.message)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ProcessPaymentResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "payment",
            "success",
            "message",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Payment,
            Success,
            Message,
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
                            "payment" => Ok(GeneratedField::Payment),
                            "success" => Ok(GeneratedField::Success),
                            "message" => Ok(GeneratedField::Message),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ProcessPaymentResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.ProcessPaymentResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ProcessPaymentResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut payment__ = None;
                let mut success__ = None;
                let mut message__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Payment => {
                            if payment__.is_some() {
                                return Err(serde::de::Error::duplicate_field("payment"));
                            }
                            payment__ = map_.next_value()?;
                        }
                        GeneratedField::Success => {
                            if success__.is_some() {
                                return Err(serde::de::Error::duplicate_field("success"));
                            }
                            success__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Message => {
                            if message__.is_some() {
                                return Err(serde::de::Error::duplicate_field("message"));
                            }
                            message__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ProcessPaymentResponse {
                    payment: payment__,
                    success: success__.unwrap_or_default(),
                    message: message__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.ProcessPaymentResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for Refund {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.refund_id.is_empty() {
            len += 1;
        }
        if !self.payment_id.is_empty() {
            len += 1;
        }
        if self.amount != 0. {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if !self.reason.is_empty() {
            len += 1;
        }
        if self.status != 0 {
            len += 1;
        }
        if !self.gateway_reference.is_empty() {
            len += 1;
        }
        if !self.created_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.Refund", len)?;
        if !self.refund_id.is_empty() {
            struct_ser.serialize_field("refundId", &self.refund_id)?;
        }
        if !self.payment_id.is_empty() {
            struct_ser.serialize_field("paymentId", &self.payment_id)?;
        }
        if self.amount != 0. {
            struct_ser.serialize_field("amount", &self.amount)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if !self.reason.is_empty() {
            struct_ser.serialize_field("reason", &self.reason)?;
        }
        if self.status != 0 {
            let v = RefundStatus::try_from(self.status)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.status)))?;
            struct_ser.serialize_field("status", &v)?;
        }
        if !self.gateway_reference.is_empty() {
            struct_ser.serialize_field("gatewayReference", &self.gateway_reference)?;
        }
        if !self.created_at.is_empty() {
            struct_ser.serialize_field("createdAt", &self.created_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for Refund {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "refund_id",
            "refundId",
            "payment_id",
            "paymentId",
            "amount",
            "currency",
            "reason",
            "status",
            "gateway_reference",
            "gatewayReference",
            "created_at",
            "createdAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            RefundId,
            PaymentId,
            Amount,
            Currency,
            Reason,
            Status,
            GatewayReference,
            CreatedAt,
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
                            "refundId" | "refund_id" => Ok(GeneratedField::RefundId),
                            "paymentId" | "payment_id" => Ok(GeneratedField::PaymentId),
                            "amount" => Ok(GeneratedField::Amount),
                            "currency" => Ok(GeneratedField::Currency),
                            "reason" => Ok(GeneratedField::Reason),
                            "status" => Ok(GeneratedField::Status),
                            "gatewayReference" | "gateway_reference" => Ok(GeneratedField::GatewayReference),
                            "createdAt" | "created_at" => Ok(GeneratedField::CreatedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = Refund;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.Refund")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<Refund, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut refund_id__ = None;
                let mut payment_id__ = None;
                let mut amount__ = None;
                let mut currency__ = None;
                let mut reason__ = None;
                let mut status__ = None;
                let mut gateway_reference__ = None;
                let mut created_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::RefundId => {
                            if refund_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("refundId"));
                            }
                            refund_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::PaymentId => {
                            if payment_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentId"));
                            }
                            payment_id__ = Some(map_.next_value()?);
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
                        GeneratedField::Reason => {
                            if reason__.is_some() {
                                return Err(serde::de::Error::duplicate_field("reason"));
                            }
                            reason__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = Some(map_.next_value::<RefundStatus>()? as i32);
                        }
                        GeneratedField::GatewayReference => {
                            if gateway_reference__.is_some() {
                                return Err(serde::de::Error::duplicate_field("gatewayReference"));
                            }
                            gateway_reference__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CreatedAt => {
                            if created_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("createdAt"));
                            }
                            created_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(Refund {
                    refund_id: refund_id__.unwrap_or_default(),
                    payment_id: payment_id__.unwrap_or_default(),
                    amount: amount__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    reason: reason__.unwrap_or_default(),
                    status: status__.unwrap_or_default(),
                    gateway_reference: gateway_reference__.unwrap_or_default(),
                    created_at: created_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.Refund", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RefundPaymentRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.payment_id.is_empty() {
            len += 1;
        }
        if self.amount != 0. {
            len += 1;
        }
        if !self.reason.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.RefundPaymentRequest", len)?;
        if !self.payment_id.is_empty() {
            struct_ser.serialize_field("paymentId", &self.payment_id)?;
        }
        if self.amount != 0. {
            struct_ser.serialize_field("amount", &self.amount)?;
        }
        if !self.reason.is_empty() {
            struct_ser.serialize_field("reason", &self.reason)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RefundPaymentRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "payment_id",
            "paymentId",
            "amount",
            "reason",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            PaymentId,
            Amount,
            Reason,
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
                            "paymentId" | "payment_id" => Ok(GeneratedField::PaymentId),
                            "amount" => Ok(GeneratedField::Amount),
                            "reason" => Ok(GeneratedField::Reason),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RefundPaymentRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.RefundPaymentRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RefundPaymentRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut payment_id__ = None;
                let mut amount__ = None;
                let mut reason__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::PaymentId => {
                            if payment_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentId"));
                            }
                            payment_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Amount => {
                            if amount__.is_some() {
                                return Err(serde::de::Error::duplicate_field("amount"));
                            }
                            amount__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::Reason => {
                            if reason__.is_some() {
                                return Err(serde::de::Error::duplicate_field("reason"));
                            }
                            reason__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(RefundPaymentRequest {
                    payment_id: payment_id__.unwrap_or_default(),
                    amount: amount__.unwrap_or_default(),
                    reason: reason__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.RefundPaymentRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RefundPaymentResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.refund.is_some() {
            len += 1;
        }
        if self.payment.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.RefundPaymentResponse", len)?;
        if let Some(v) = self.refund.as_ref() {
            struct_ser.serialize_field("refund", v)?;
        }
        if let Some(v) = self.payment.as_ref() {
            struct_ser.serialize_field("payment", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for RefundPaymentResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "refund",
            "payment",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Refund,
            Payment,
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
                            "refund" => Ok(GeneratedField::Refund),
                            "payment" => Ok(GeneratedField::Payment),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RefundPaymentResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.RefundPaymentResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<RefundPaymentResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut refund__ = None;
                let mut payment__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Refund => {
                            if refund__.is_some() {
                                return Err(serde::de::Error::duplicate_field("refund"));
                            }
                            refund__ = map_.next_value()?;
                        }
                        GeneratedField::Payment => {
                            if payment__.is_some() {
                                return Err(serde::de::Error::duplicate_field("payment"));
                            }
                            payment__ = map_.next_value()?;
                        }
                    }
                }
                Ok(RefundPaymentResponse {
                    refund: refund__,
                    payment: payment__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.RefundPaymentResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for RefundStatus {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "REFUND_STATUS_UNSPECIFIED",
            Self::Pending => "REFUND_STATUS_PENDING",
            Self::Succeeded => "REFUND_STATUS_SUCCEEDED",
            Self::Failed => "REFUND_STATUS_FAILED",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for RefundStatus {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "REFUND_STATUS_UNSPECIFIED",
            "REFUND_STATUS_PENDING",
            "REFUND_STATUS_SUCCEEDED",
            "REFUND_STATUS_FAILED",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = RefundStatus;

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
                    "REFUND_STATUS_UNSPECIFIED" => Ok(RefundStatus::Unspecified),
                    "REFUND_STATUS_PENDING" => Ok(RefundStatus::Pending),
                    "REFUND_STATUS_SUCCEEDED" => Ok(RefundStatus::Succeeded),
                    "REFUND_STATUS_FAILED" => Ok(RefundStatus::Failed),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for Subscription {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.subscription_id.is_empty() {
            len += 1;
        }
        if !self.customer_id.is_empty() {
            len += 1;
        }
        if !self.plan_id.is_empty() {
            len += 1;
        }
        if self.tier != 0 {
            len += 1;
        }
        if self.status != 0 {
            len += 1;
        }
        if self.billing_interval != 0 {
            len += 1;
        }
        if self.amount != 0. {
            len += 1;
        }
        if !self.currency.is_empty() {
            len += 1;
        }
        if self.payment_method.is_some() {
            len += 1;
        }
        if !self.current_period_start.is_empty() {
            len += 1;
        }
        if !self.current_period_end.is_empty() {
            len += 1;
        }
        if !self.trial_end.is_empty() {
            len += 1;
        }
        if self.cancel_at_period_end {
            len += 1;
        }
        if !self.cancelled_at.is_empty() {
            len += 1;
        }
        if !self.cancellation_reason.is_empty() {
            len += 1;
        }
        if !self.metadata.is_empty() {
            len += 1;
        }
        if !self.created_at.is_empty() {
            len += 1;
        }
        if !self.updated_at.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.Subscription", len)?;
        if !self.subscription_id.is_empty() {
            struct_ser.serialize_field("subscriptionId", &self.subscription_id)?;
        }
        if !self.customer_id.is_empty() {
            struct_ser.serialize_field("customerId", &self.customer_id)?;
        }
        if !self.plan_id.is_empty() {
            struct_ser.serialize_field("planId", &self.plan_id)?;
        }
        if self.tier != 0 {
            let v = SubscriptionTier::try_from(self.tier)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.tier)))?;
            struct_ser.serialize_field("tier", &v)?;
        }
        if self.status != 0 {
            let v = SubscriptionStatus::try_from(self.status)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.status)))?;
            struct_ser.serialize_field("status", &v)?;
        }
        if self.billing_interval != 0 {
            let v = BillingInterval::try_from(self.billing_interval)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.billing_interval)))?;
            struct_ser.serialize_field("billingInterval", &v)?;
        }
        if self.amount != 0. {
            struct_ser.serialize_field("amount", &self.amount)?;
        }
        if !self.currency.is_empty() {
            struct_ser.serialize_field("currency", &self.currency)?;
        }
        if let Some(v) = self.payment_method.as_ref() {
            struct_ser.serialize_field("paymentMethod", v)?;
        }
        if !self.current_period_start.is_empty() {
            struct_ser.serialize_field("currentPeriodStart", &self.current_period_start)?;
        }
        if !self.current_period_end.is_empty() {
            struct_ser.serialize_field("currentPeriodEnd", &self.current_period_end)?;
        }
        if !self.trial_end.is_empty() {
            struct_ser.serialize_field("trialEnd", &self.trial_end)?;
        }
        if self.cancel_at_period_end {
            struct_ser.serialize_field("cancelAtPeriodEnd", &self.cancel_at_period_end)?;
        }
        if !self.cancelled_at.is_empty() {
            struct_ser.serialize_field("cancelledAt", &self.cancelled_at)?;
        }
        if !self.cancellation_reason.is_empty() {
            struct_ser.serialize_field("cancellationReason", &self.cancellation_reason)?;
        }
        if !self.metadata.is_empty() {
            struct_ser.serialize_field("metadata", &self.metadata)?;
        }
        if !self.created_at.is_empty() {
            struct_ser.serialize_field("createdAt", &self.created_at)?;
        }
        if !self.updated_at.is_empty() {
            struct_ser.serialize_field("updatedAt", &self.updated_at)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for Subscription {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscription_id",
            "subscriptionId",
            "customer_id",
            "customerId",
            "plan_id",
            "planId",
            "tier",
            "status",
            "billing_interval",
            "billingInterval",
            "amount",
            "currency",
            "payment_method",
            "paymentMethod",
            "current_period_start",
            "currentPeriodStart",
            "current_period_end",
            "currentPeriodEnd",
            "trial_end",
            "trialEnd",
            "cancel_at_period_end",
            "cancelAtPeriodEnd",
            "cancelled_at",
            "cancelledAt",
            "cancellation_reason",
            "cancellationReason",
            "metadata",
            "created_at",
            "createdAt",
            "updated_at",
            "updatedAt",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            SubscriptionId,
            CustomerId,
            PlanId,
            Tier,
            Status,
            BillingInterval,
            Amount,
            Currency,
            PaymentMethod,
            CurrentPeriodStart,
            CurrentPeriodEnd,
            TrialEnd,
            CancelAtPeriodEnd,
            CancelledAt,
            CancellationReason,
            Metadata,
            CreatedAt,
            UpdatedAt,
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
                            "subscriptionId" | "subscription_id" => Ok(GeneratedField::SubscriptionId),
                            "customerId" | "customer_id" => Ok(GeneratedField::CustomerId),
                            "planId" | "plan_id" => Ok(GeneratedField::PlanId),
                            "tier" => Ok(GeneratedField::Tier),
                            "status" => Ok(GeneratedField::Status),
                            "billingInterval" | "billing_interval" => Ok(GeneratedField::BillingInterval),
                            "amount" => Ok(GeneratedField::Amount),
                            "currency" => Ok(GeneratedField::Currency),
                            "paymentMethod" | "payment_method" => Ok(GeneratedField::PaymentMethod),
                            "currentPeriodStart" | "current_period_start" => Ok(GeneratedField::CurrentPeriodStart),
                            "currentPeriodEnd" | "current_period_end" => Ok(GeneratedField::CurrentPeriodEnd),
                            "trialEnd" | "trial_end" => Ok(GeneratedField::TrialEnd),
                            "cancelAtPeriodEnd" | "cancel_at_period_end" => Ok(GeneratedField::CancelAtPeriodEnd),
                            "cancelledAt" | "cancelled_at" => Ok(GeneratedField::CancelledAt),
                            "cancellationReason" | "cancellation_reason" => Ok(GeneratedField::CancellationReason),
                            "metadata" => Ok(GeneratedField::Metadata),
                            "createdAt" | "created_at" => Ok(GeneratedField::CreatedAt),
                            "updatedAt" | "updated_at" => Ok(GeneratedField::UpdatedAt),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = Subscription;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.Subscription")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<Subscription, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscription_id__ = None;
                let mut customer_id__ = None;
                let mut plan_id__ = None;
                let mut tier__ = None;
                let mut status__ = None;
                let mut billing_interval__ = None;
                let mut amount__ = None;
                let mut currency__ = None;
                let mut payment_method__ = None;
                let mut current_period_start__ = None;
                let mut current_period_end__ = None;
                let mut trial_end__ = None;
                let mut cancel_at_period_end__ = None;
                let mut cancelled_at__ = None;
                let mut cancellation_reason__ = None;
                let mut metadata__ = None;
                let mut created_at__ = None;
                let mut updated_at__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::SubscriptionId => {
                            if subscription_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscriptionId"));
                            }
                            subscription_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CustomerId => {
                            if customer_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("customerId"));
                            }
                            customer_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::PlanId => {
                            if plan_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("planId"));
                            }
                            plan_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Tier => {
                            if tier__.is_some() {
                                return Err(serde::de::Error::duplicate_field("tier"));
                            }
                            tier__ = Some(map_.next_value::<SubscriptionTier>()? as i32);
                        }
                        GeneratedField::Status => {
                            if status__.is_some() {
                                return Err(serde::de::Error::duplicate_field("status"));
                            }
                            status__ = Some(map_.next_value::<SubscriptionStatus>()? as i32);
                        }
                        GeneratedField::BillingInterval => {
                            if billing_interval__.is_some() {
                                return Err(serde::de::Error::duplicate_field("billingInterval"));
                            }
                            billing_interval__ = Some(map_.next_value::<BillingInterval>()? as i32);
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
                        GeneratedField::PaymentMethod => {
                            if payment_method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentMethod"));
                            }
                            payment_method__ = map_.next_value()?;
                        }
                        GeneratedField::CurrentPeriodStart => {
                            if current_period_start__.is_some() {
                                return Err(serde::de::Error::duplicate_field("currentPeriodStart"));
                            }
                            current_period_start__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CurrentPeriodEnd => {
                            if current_period_end__.is_some() {
                                return Err(serde::de::Error::duplicate_field("currentPeriodEnd"));
                            }
                            current_period_end__ = Some(map_.next_value()?);
                        }
                        GeneratedField::TrialEnd => {
                            if trial_end__.is_some() {
                                return Err(serde::de::Error::duplicate_field("trialEnd"));
                            }
                            trial_end__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CancelAtPeriodEnd => {
                            if cancel_at_period_end__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cancelAtPeriodEnd"));
                            }
                            cancel_at_period_end__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CancelledAt => {
                            if cancelled_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cancelledAt"));
                            }
                            cancelled_at__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CancellationReason => {
                            if cancellation_reason__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cancellationReason"));
                            }
                            cancellation_reason__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Metadata => {
                            if metadata__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metadata"));
                            }
                            metadata__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, _>>()?
                            );
                        }
                        GeneratedField::CreatedAt => {
                            if created_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("createdAt"));
                            }
                            created_at__ = Some(map_.next_value()?);
                        }
                        GeneratedField::UpdatedAt => {
                            if updated_at__.is_some() {
                                return Err(serde::de::Error::duplicate_field("updatedAt"));
                            }
                            updated_at__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(Subscription {
                    subscription_id: subscription_id__.unwrap_or_default(),
                    customer_id: customer_id__.unwrap_or_default(),
                    plan_id: plan_id__.unwrap_or_default(),
                    tier: tier__.unwrap_or_default(),
                    status: status__.unwrap_or_default(),
                    billing_interval: billing_interval__.unwrap_or_default(),
                    amount: amount__.unwrap_or_default(),
                    currency: currency__.unwrap_or_default(),
                    payment_method: payment_method__,
                    current_period_start: current_period_start__.unwrap_or_default(),
                    current_period_end: current_period_end__.unwrap_or_default(),
                    trial_end: trial_end__.unwrap_or_default(),
                    cancel_at_period_end: cancel_at_period_end__.unwrap_or_default(),
                    cancelled_at: cancelled_at__.unwrap_or_default(),
                    cancellation_reason: cancellation_reason__.unwrap_or_default(),
                    metadata: metadata__.unwrap_or_default(),
                    created_at: created_at__.unwrap_or_default(),
                    updated_at: updated_at__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.Subscription", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for SubscriptionStatus {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "SUBSCRIPTION_STATUS_UNSPECIFIED",
            Self::Trial => "SUBSCRIPTION_STATUS_TRIAL",
            Self::Active => "SUBSCRIPTION_STATUS_ACTIVE",
            Self::PastDue => "SUBSCRIPTION_STATUS_PAST_DUE",
            Self::Paused => "SUBSCRIPTION_STATUS_PAUSED",
            Self::Cancelled => "SUBSCRIPTION_STATUS_CANCELLED",
            Self::Expired => "SUBSCRIPTION_STATUS_EXPIRED",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for SubscriptionStatus {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "SUBSCRIPTION_STATUS_UNSPECIFIED",
            "SUBSCRIPTION_STATUS_TRIAL",
            "SUBSCRIPTION_STATUS_ACTIVE",
            "SUBSCRIPTION_STATUS_PAST_DUE",
            "SUBSCRIPTION_STATUS_PAUSED",
            "SUBSCRIPTION_STATUS_CANCELLED",
            "SUBSCRIPTION_STATUS_EXPIRED",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = SubscriptionStatus;

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
                    "SUBSCRIPTION_STATUS_UNSPECIFIED" => Ok(SubscriptionStatus::Unspecified),
                    "SUBSCRIPTION_STATUS_TRIAL" => Ok(SubscriptionStatus::Trial),
                    "SUBSCRIPTION_STATUS_ACTIVE" => Ok(SubscriptionStatus::Active),
                    "SUBSCRIPTION_STATUS_PAST_DUE" => Ok(SubscriptionStatus::PastDue),
                    "SUBSCRIPTION_STATUS_PAUSED" => Ok(SubscriptionStatus::Paused),
                    "SUBSCRIPTION_STATUS_CANCELLED" => Ok(SubscriptionStatus::Cancelled),
                    "SUBSCRIPTION_STATUS_EXPIRED" => Ok(SubscriptionStatus::Expired),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for SubscriptionTier {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let variant = match self {
            Self::Unspecified => "SUBSCRIPTION_TIER_UNSPECIFIED",
            Self::Free => "SUBSCRIPTION_TIER_FREE",
            Self::Basic => "SUBSCRIPTION_TIER_BASIC",
            Self::Premium => "SUBSCRIPTION_TIER_PREMIUM",
            Self::Professional => "SUBSCRIPTION_TIER_PROFESSIONAL",
            Self::Enterprise => "SUBSCRIPTION_TIER_ENTERPRISE",
        };
        serializer.serialize_str(variant)
    }
}
impl<'de> serde::Deserialize<'de> for SubscriptionTier {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "SUBSCRIPTION_TIER_UNSPECIFIED",
            "SUBSCRIPTION_TIER_FREE",
            "SUBSCRIPTION_TIER_BASIC",
            "SUBSCRIPTION_TIER_PREMIUM",
            "SUBSCRIPTION_TIER_PROFESSIONAL",
            "SUBSCRIPTION_TIER_ENTERPRISE",
        ];

        struct GeneratedVisitor;

        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = SubscriptionTier;

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
                    "SUBSCRIPTION_TIER_UNSPECIFIED" => Ok(SubscriptionTier::Unspecified),
                    "SUBSCRIPTION_TIER_FREE" => Ok(SubscriptionTier::Free),
                    "SUBSCRIPTION_TIER_BASIC" => Ok(SubscriptionTier::Basic),
                    "SUBSCRIPTION_TIER_PREMIUM" => Ok(SubscriptionTier::Premium),
                    "SUBSCRIPTION_TIER_PROFESSIONAL" => Ok(SubscriptionTier::Professional),
                    "SUBSCRIPTION_TIER_ENTERPRISE" => Ok(SubscriptionTier::Enterprise),
                    _ => Err(serde::de::Error::unknown_variant(value, FIELDS)),
                }
            }
        }
        deserializer.deserialize_any(GeneratedVisitor)
    }
}
impl serde::Serialize for UpdateSubscriptionRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.subscription_id.is_empty() {
            len += 1;
        }
        if !self.plan_id.is_empty() {
            len += 1;
        }
        if self.tier != 0 {
            len += 1;
        }
        if self.billing_interval != 0 {
            len += 1;
        }
        if self.amount != 0. {
            len += 1;
        }
        if self.payment_method.is_some() {
            len += 1;
        }
        if !self.metadata.is_empty() {
            len += 1;
        }
        if self.pause {
            len += 1;
        }
        if self.resume {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.UpdateSubscriptionRequest", len)?;
        if !self.subscription_id.is_empty() {
            struct_ser.serialize_field("subscriptionId", &self.subscription_id)?;
        }
        if !self.plan_id.is_empty() {
            struct_ser.serialize_field("planId", &self.plan_id)?;
        }
        if self.tier != 0 {
            let v = SubscriptionTier::try_from(self.tier)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.tier)))?;
            struct_ser.serialize_field("tier", &v)?;
        }
        if self.billing_interval != 0 {
            let v = BillingInterval::try_from(self.billing_interval)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.billing_interval)))?;
            struct_ser.serialize_field("billingInterval", &v)?;
        }
        if self.amount != 0. {
            struct_ser.serialize_field("amount", &self.amount)?;
        }
        if let Some(v) = self.payment_method.as_ref() {
            struct_ser.serialize_field("paymentMethod", v)?;
        }
        if !self.metadata.is_empty() {
            struct_ser.serialize_field("metadata", &self.metadata)?;
        }
        if self.pause {
            struct_ser.serialize_field("pause", &self.pause)?;
        }
        if self.resume {
            struct_ser.serialize_field("resume", &self.resume)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for UpdateSubscriptionRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscription_id",
            "subscriptionId",
            "plan_id",
            "planId",
            "tier",
            "billing_interval",
            "billingInterval",
            "amount",
            "payment_method",
            "paymentMethod",
            "metadata",
            "pause",
            "resume",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            SubscriptionId,
            PlanId,
            Tier,
            BillingInterval,
            Amount,
            PaymentMethod,
            Metadata,
            Pause,
            Resume,
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
                            "subscriptionId" | "subscription_id" => Ok(GeneratedField::SubscriptionId),
                            "planId" | "plan_id" => Ok(GeneratedField::PlanId),
                            "tier" => Ok(GeneratedField::Tier),
                            "billingInterval" | "billing_interval" => Ok(GeneratedField::BillingInterval),
                            "amount" => Ok(GeneratedField::Amount),
                            "paymentMethod" | "payment_method" => Ok(GeneratedField::PaymentMethod),
                            "metadata" => Ok(GeneratedField::Metadata),
                            "pause" => Ok(GeneratedField::Pause),
                            "resume" => Ok(GeneratedField::Resume),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = UpdateSubscriptionRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.UpdateSubscriptionRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<UpdateSubscriptionRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscription_id__ = None;
                let mut plan_id__ = None;
                let mut tier__ = None;
                let mut billing_interval__ = None;
                let mut amount__ = None;
                let mut payment_method__ = None;
                let mut metadata__ = None;
                let mut pause__ = None;
                let mut resume__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::SubscriptionId => {
                            if subscription_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscriptionId"));
                            }
                            subscription_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::PlanId => {
                            if plan_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("planId"));
                            }
                            plan_id__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Tier => {
                            if tier__.is_some() {
                                return Err(serde::de::Error::duplicate_field("tier"));
                            }
                            tier__ = Some(map_.next_value::<SubscriptionTier>()? as i32);
                        }
                        GeneratedField::BillingInterval => {
                            if billing_interval__.is_some() {
                                return Err(serde::de::Error::duplicate_field("billingInterval"));
                            }
                            billing_interval__ = Some(map_.next_value::<BillingInterval>()? as i32);
                        }
                        GeneratedField::Amount => {
                            if amount__.is_some() {
                                return Err(serde::de::Error::duplicate_field("amount"));
                            }
                            amount__ = 
                                Some(map_.next_value::<::pbjson::private::NumberDeserialize<_>>()?.0)
                            ;
                        }
                        GeneratedField::PaymentMethod => {
                            if payment_method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("paymentMethod"));
                            }
                            payment_method__ = map_.next_value()?;
                        }
                        GeneratedField::Metadata => {
                            if metadata__.is_some() {
                                return Err(serde::de::Error::duplicate_field("metadata"));
                            }
                            metadata__ = Some(
                                map_.next_value::<std::collections::BTreeMap<_, _>>()?
                            );
                        }
                        GeneratedField::Pause => {
                            if pause__.is_some() {
                                return Err(serde::de::Error::duplicate_field("pause"));
                            }
                            pause__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Resume => {
                            if resume__.is_some() {
                                return Err(serde::de::Error::duplicate_field("resume"));
                            }
                            resume__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(UpdateSubscriptionRequest {
                    subscription_id: subscription_id__.unwrap_or_default(),
                    plan_id: plan_id__.unwrap_or_default(),
                    tier: tier__.unwrap_or_default(),
                    billing_interval: billing_interval__.unwrap_or_default(),
                    amount: amount__.unwrap_or_default(),
                    payment_method: payment_method__,
                    metadata: metadata__.unwrap_or_default(),
                    pause: pause__.unwrap_or_default(),
                    resume: resume__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.UpdateSubscriptionRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for UpdateSubscriptionResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.subscription.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.UpdateSubscriptionResponse", len)?;
        if let Some(v) = self.subscription.as_ref() {
            struct_ser.serialize_field("subscription", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for UpdateSubscriptionResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "subscription",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Subscription,
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
                            "subscription" => Ok(GeneratedField::Subscription),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = UpdateSubscriptionResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.UpdateSubscriptionResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<UpdateSubscriptionResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut subscription__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Subscription => {
                            if subscription__.is_some() {
                                return Err(serde::de::Error::duplicate_field("subscription"));
                            }
                            subscription__ = map_.next_value()?;
                        }
                    }
                }
                Ok(UpdateSubscriptionResponse {
                    subscription: subscription__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.UpdateSubscriptionResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for UpiDetails {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.vpa.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.UpiDetails", len)?;
        if !self.vpa.is_empty() {
            struct_ser.serialize_field("vpa", &self.vpa)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for UpiDetails {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "vpa",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Vpa,
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
                            "vpa" => Ok(GeneratedField::Vpa),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = UpiDetails;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.UpiDetails")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<UpiDetails, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut vpa__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Vpa => {
                            if vpa__.is_some() {
                                return Err(serde::de::Error::duplicate_field("vpa"));
                            }
                            vpa__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(UpiDetails {
                    vpa: vpa__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.UpiDetails", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ValidatePaymentMethodRequest {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.method.is_some() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.ValidatePaymentMethodRequest", len)?;
        if let Some(v) = self.method.as_ref() {
            struct_ser.serialize_field("method", v)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ValidatePaymentMethodRequest {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "method",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Method,
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
                            "method" => Ok(GeneratedField::Method),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ValidatePaymentMethodRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.ValidatePaymentMethodRequest")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ValidatePaymentMethodRequest, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut method__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Method => {
                            if method__.is_some() {
                                return Err(serde::de::Error::duplicate_field("method"));
                            }
                            method__ = map_.next_value()?;
                        }
                    }
                }
                Ok(ValidatePaymentMethodRequest {
                    method: method__,
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.ValidatePaymentMethodRequest", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for ValidatePaymentMethodResponse {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if self.valid {
            len += 1;
        }
        if !self.errors.is_empty() {
            len += 1;
        }
        if self.card_brand != 0 {
            len += 1;
        }
        if !self.masked_number.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.ValidatePaymentMethodResponse", len)?;
        if self.valid {
            struct_ser.serialize_field("valid", &self.valid)?;
        }
        if !self.errors.is_empty() {
            struct_ser.serialize_field("errors", &self.errors)?;
        }
        if self.card_brand != 0 {
            let v = CardBrand::try_from(self.card_brand)
                .map_err(|_| serde::ser::Error::custom(format!("Invalid variant {}", self.card_brand)))?;
            struct_ser.serialize_field("cardBrand", &v)?;
        }
        if !self.masked_number.is_empty() {
            struct_ser.serialize_field("maskedNumber", &self.masked_number)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for ValidatePaymentMethodResponse {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "valid",
            "errors",
            "card_brand",
            "cardBrand",
            "masked_number",
            "maskedNumber",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Valid,
            Errors,
            CardBrand,
            MaskedNumber,
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
                            "valid" => Ok(GeneratedField::Valid),
                            "errors" => Ok(GeneratedField::Errors),
                            "cardBrand" | "card_brand" => Ok(GeneratedField::CardBrand),
                            "maskedNumber" | "masked_number" => Ok(GeneratedField::MaskedNumber),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = ValidatePaymentMethodResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.ValidatePaymentMethodResponse")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<ValidatePaymentMethodResponse, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut valid__ = None;
                let mut errors__ = None;
                let mut card_brand__ = None;
                let mut masked_number__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Valid => {
                            if valid__.is_some() {
                                return Err(serde::de::Error::duplicate_field("valid"));
                            }
                            valid__ = Some(map_.next_value()?);
                        }
                        GeneratedField::Errors => {
                            if errors__.is_some() {
                                return Err(serde::de::Error::duplicate_field("errors"));
                            }
                            errors__ = Some(map_.next_value()?);
                        }
                        GeneratedField::CardBrand => {
                            if card_brand__.is_some() {
                                return Err(serde::de::Error::duplicate_field("cardBrand"));
                            }
                            card_brand__ = Some(map_.next_value::<CardBrand>()? as i32);
                        }
                        GeneratedField::MaskedNumber => {
                            if masked_number__.is_some() {
                                return Err(serde::de::Error::duplicate_field("maskedNumber"));
                            }
                            masked_number__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(ValidatePaymentMethodResponse {
                    valid: valid__.unwrap_or_default(),
                    errors: errors__.unwrap_or_default(),
                    card_brand: card_brand__.unwrap_or_default(),
                    masked_number: masked_number__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.ValidatePaymentMethodResponse", FIELDS, GeneratedVisitor)
    }
}
impl serde::Serialize for WalletDetails {
    #[allow(deprecated)]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut len = 0;
        if !self.provider.is_empty() {
            len += 1;
        }
        if !self.wallet_id.is_empty() {
            len += 1;
        }
        let mut struct_ser = serializer.serialize_struct("payment.v1.WalletDetails", len)?;
        if !self.provider.is_empty() {
            struct_ser.serialize_field("provider", &self.provider)?;
        }
        if !self.wallet_id.is_empty() {
            struct_ser.serialize_field("walletId", &self.wallet_id)?;
        }
        struct_ser.end()
    }
}
impl<'de> serde::Deserialize<'de> for WalletDetails {
    #[allow(deprecated)]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &[
            "provider",
            "wallet_id",
            "walletId",
        ];

        #[allow(clippy::enum_variant_names)]
        enum GeneratedField {
            Provider,
            WalletId,
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
                            "provider" => Ok(GeneratedField::Provider),
                            "walletId" | "wallet_id" => Ok(GeneratedField::WalletId),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }
                deserializer.deserialize_identifier(GeneratedVisitor)
            }
        }
        struct GeneratedVisitor;
        impl<'de> serde::de::Visitor<'de> for GeneratedVisitor {
            type Value = WalletDetails;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("struct payment.v1.WalletDetails")
            }

            fn visit_map<V>(self, mut map_: V) -> std::result::Result<WalletDetails, V::Error>
                where
                    V: serde::de::MapAccess<'de>,
            {
                let mut provider__ = None;
                let mut wallet_id__ = None;
                while let Some(k) = map_.next_key()? {
                    match k {
                        GeneratedField::Provider => {
                            if provider__.is_some() {
                                return Err(serde::de::Error::duplicate_field("provider"));
                            }
                            provider__ = Some(map_.next_value()?);
                        }
                        GeneratedField::WalletId => {
                            if wallet_id__.is_some() {
                                return Err(serde::de::Error::duplicate_field("walletId"));
                            }
                            wallet_id__ = Some(map_.next_value()?);
                        }
                    }
                }
                Ok(WalletDetails {
                    provider: provider__.unwrap_or_default(),
                    wallet_id: wallet_id__.unwrap_or_default(),
                })
            }
        }
        deserializer.deserialize_struct("payment.v1.WalletDetails", FIELDS, GeneratedVisitor)
    }
}
