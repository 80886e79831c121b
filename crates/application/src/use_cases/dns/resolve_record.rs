use dyndns_domain::zone::fqdn;
use dyndns_domain::{
    AnswerBuilder, DnsAnswer, DnsQuestion, DomainError, DomainMatch, QueryClass, RecordType,
    ZoneMatcher,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{AliasRepository, HostRepository};
use crate::services::SerialClock;

/// Answer parameters that do not come from the store.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Served for every zone apex.
    pub apex_ip: IpAddr,
    /// Published as the SOA nameserver.
    pub parent_ns: Arc<str>,
    pub default_ttl: u32,
}

/// Turns one question into records, reading hosts and aliases on every call.
pub struct RecordResolver {
    matcher: Arc<ZoneMatcher>,
    hosts: Arc<dyn HostRepository>,
    aliases: Arc<dyn AliasRepository>,
    settings: ResolverSettings,
    serial: Arc<SerialClock>,
}

impl RecordResolver {
    pub fn new(
        matcher: Arc<ZoneMatcher>,
        hosts: Arc<dyn HostRepository>,
        aliases: Arc<dyn AliasRepository>,
        settings: ResolverSettings,
        serial: Arc<SerialClock>,
    ) -> Self {
        Self {
            matcher,
            hosts,
            aliases,
            settings,
            serial,
        }
    }

    pub fn matcher(&self) -> &ZoneMatcher {
        &self.matcher
    }

    /// Records for `question`, in answer-section order. An empty list means
    /// the name exists in no form this server can answer.
    ///
    /// Fails with [`DomainError::DomainUnsupported`] for A, AAAA and CNAME
    /// questions outside every zone.
    #[instrument(skip(self), fields(name = %question.name, qtype = %question.record_type))]
    pub async fn resolve(&self, question: &DnsQuestion) -> Result<Vec<DnsAnswer>, DomainError> {
        if question.query_class != QueryClass::In {
            debug!(class = %question.query_class, "Non-IN class, no answer");
            return Ok(Vec::new());
        }

        match question.record_type {
            RecordType::A | RecordType::AAAA => self.resolve_address(&question.name).await,
            RecordType::CNAME => self.resolve_cname(&question.name).await,
            RecordType::SOA => Ok(self.resolve_soa(&question.name).ok().into_iter().collect()),
            RecordType::TXT | RecordType::Other(_) => Ok(Vec::new()),
        }
    }

    /// SOA of the zone `name` belongs to.
    pub fn resolve_soa(&self, name: &str) -> Result<DnsAnswer, DomainError> {
        let zone = self
            .matcher
            .classify(name)
            .zone()
            .map(str::to_string)
            .ok_or_else(|| DomainError::DomainUnsupported(name.to_string()))?;

        Ok(AnswerBuilder::soa_answer(
            &zone,
            &self.settings.parent_ns,
            self.settings.default_ttl,
            self.serial.next(),
        ))
    }

    async fn resolve_address(&self, name: &str) -> Result<Vec<DnsAnswer>, DomainError> {
        let owner = fqdn(name);

        let (hostname, domain) = match self.matcher.classify(name) {
            DomainMatch::Unsupported => {
                return Err(DomainError::DomainUnsupported(name.to_string()))
            }
            DomainMatch::IsApex(_) => {
                return Ok(vec![AnswerBuilder::addr_answer(
                    &owner,
                    self.settings.apex_ip,
                    self.settings.default_ttl,
                )]);
            }
            DomainMatch::Matched { hostname, domain } => (hostname, domain),
        };

        if let Some(host) = self.hosts.find(&hostname, &domain).await? {
            if let Some(ip) = host.ip.as_deref() {
                return Ok(vec![AnswerBuilder::ip_answer(&owner, ip, host.ttl)?]);
            }
            debug!(host = %host.full_domain(), "Host has no address, trying aliases");
        }

        self.alias_answers(&owner, &hostname, &domain, true).await
    }

    async fn resolve_cname(&self, name: &str) -> Result<Vec<DnsAnswer>, DomainError> {
        match self.matcher.classify(name) {
            DomainMatch::Unsupported => Err(DomainError::DomainUnsupported(name.to_string())),
            DomainMatch::IsApex(_) => Ok(Vec::new()),
            DomainMatch::Matched { hostname, domain } => {
                self.alias_answers(&fqdn(name), &hostname, &domain, false)
                    .await
            }
        }
    }

    async fn alias_answers(
        &self,
        owner: &str,
        hostname: &str,
        domain: &str,
        with_target_address: bool,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        let Some(alias) = self.aliases.find(hostname, domain).await? else {
            return Ok(Vec::new());
        };

        let target = alias.target.fqdn();
        let mut answers = vec![AnswerBuilder::cname_answer(owner, &target, alias.ttl)];

        if with_target_address {
            if let Some(ip) = alias.target.ip.as_deref() {
                answers.push(AnswerBuilder::ip_answer(&target, ip, alias.target.ttl)?);
            }
        }

        Ok(answers)
    }
}
