use yew::prelude::*;

use crate::components::asset_image::AssetImage;
use crate::content::TeamMember;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamCardView {
    pub key: String,
    pub member: TeamMember,
}

pub fn team_card_views(team: &[TeamMember]) -> Vec<TeamCardView> {
    team.iter()
        .map(|member| TeamCardView {
            key: member.id.clone(),
            member: member.clone(),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub member: TeamMember,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let member = &props.member;

    html! {
        <div class="team-card">
            <AssetImage src={member.image.clone()} alt={member.name.clone()} class={classes!("team-card-image")} />
            <div class="team-card-info">
                <h3 class="team-card-name">{&member.name}</h3>
                <p class="team-card-role">{&member.role}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CompanyProfile;

    #[test]
    fn team_cards_keep_order_and_keys() {
        let profile = CompanyProfile::default();
        let views = team_card_views(&profile.team);
        let keys: Vec<&str> = views.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, ["1", "2", "3"]);
        let roles: Vec<&str> = views.iter().map(|v| v.member.role.as_str()).collect();
        assert_eq!(roles, ["CEO", "CTO", "CFO"]);
    }
}
