//! Public landing page.

use common::routes::query_param;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::top_banner::TopBanner;
use crate::storage::client_store;

struct Service {
    title: &'static str,
    text: &'static str,
    image: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Reciclagem de Catalisadores, Baterias e Rodas de Alumínio",
        text: "Adquirimos catalisadores, baterias e rodas de alumínio para reciclagem, garantindo reaproveitamento eficiente de materiais valiosos.",
        image: "/images/catalisador.png",
    },
    Service {
        title: "Aquisição de Peças da Linha Pesada",
        text: "Compramos peças da linha pesada para revenda, com avaliação rigorosa que assegura qualidade e segurança ao mercado.",
        image: "/images/Roda.png",
    },
    Service {
        title: "Compra de Placas Eletrônicas",
        text: "Reaproveitamos componentes e materiais de placas eletrônicas usadas, maximizando recursos com responsabilidade.",
        image: "/images/placa%20eletronica.png",
    },
];

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let inactive = ctx
            .link()
            .location()
            .is_some_and(|location| query_param(location.query_str(), "reason") == Some("inactive"));
        let logged_in = client_store().session().current().is_some();

        html! {
            <div class="home">
                if inactive {
                    <div class="alert alert-error">
                        { "Sua conta foi desativada. Entre em contato com a Recicla Ebenezer para mais informações." }
                    </div>
                }
                <TopBanner />

                <section class="home-about">
                    <img src="/images/empresa%20fachada.png" alt="Fachada da empresa" loading="lazy" />
                    <div>
                        <h2>{ "Nossa História" }</h2>
                        <p>{ "Fundada para transformar resíduos em recursos valiosos, respeitando o meio ambiente e contribuindo para um futuro mais sustentável." }</p>
                        <p>{ "Carregamos o compromisso de seriedade e dedicação, guiando nossa atuação com ética e foco no resultado." }</p>
                    </div>
                </section>

                <section class="home-services">
                    <p class="eyebrow">{ "Serviços" }</p>
                    <h3>{ "Operamos com excelência e responsabilidade" }</h3>
                    <div class="grid-3">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="card service">
                                <img src={service.image} alt={service.title} loading="lazy" />
                                <h4>{ service.title }</h4>
                                <p>{ service.text }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="home-cta">
                    <div>
                        <h4>{ "Pronto para acessar o catálogo?" }</h4>
                        <p>{ "Entre com suas credenciais de parceiro para visualizar preços, estoque e detalhes completos." }</p>
                    </div>
                    if logged_in {
                        <Link<Route> to={Route::Catalog} classes="btn btn-primary">{ "Ir para o catálogo" }</Link<Route>>
                    } else {
                        <Link<Route> to={Route::Login} classes="btn btn-primary">{ "Ir para login" }</Link<Route>>
                    }
                </section>

                <footer class="home-footer">
                    <p>{ "© 2026 Recicla Ebenezer - Todos os direitos reservados" }</p>
                </footer>
            </div>
        }
    }
}
