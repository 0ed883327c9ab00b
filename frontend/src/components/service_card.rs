use yew::prelude::*;

use crate::animation::{card_emphasis, CardEmphasis};
use crate::content::Service;

/// A service record ready to render: keyed by its id, styled by its emphasis.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCardView {
    pub key: String,
    pub service: Service,
    pub emphasis: CardEmphasis,
}

/// Projects services to cards in input order. `driver` is the scroll offset
/// feeding the emphasis curve.
pub fn service_card_views(services: &[Service], driver: f64) -> Vec<ServiceCardView> {
    services
        .iter()
        .enumerate()
        .map(|(index, service)| ServiceCardView {
            key: service.id.clone(),
            service: service.clone(),
            emphasis: card_emphasis(driver, index),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub emphasis: CardEmphasis,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <div class="service-card" style={props.emphasis.to_style()}>
            <span class="service-card-icon">{&service.icon}</span>
            <h3 class="service-card-title">{&service.title}</h3>
            <p class="service-card-description">{&service.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CompanyProfile;

    #[test]
    fn cards_follow_input_order() {
        let profile = CompanyProfile::default();
        let views = service_card_views(&profile.services, 0.0);
        let keys: Vec<&str> = views.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, ["1", "2", "3"]);
        let titles: Vec<&str> = views.iter().map(|v| v.service.title.as_str()).collect();
        assert_eq!(titles, ["AI Solutions", "Cloud Services", "Cybersecurity"]);
    }

    #[test]
    fn emphasis_follows_the_driver() {
        let profile = CompanyProfile::default();
        let views = service_card_views(&profile.services, 200.0);
        assert_eq!(views[0].emphasis, CardEmphasis { opacity: 0.5, scale: 0.8 });
        assert_eq!(views[1].emphasis, CardEmphasis { opacity: 1.0, scale: 1.0 });
        assert_eq!(views[2].emphasis, CardEmphasis { opacity: 0.5, scale: 0.8 });
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(service_card_views(&[], 0.0).is_empty());
    }
}
