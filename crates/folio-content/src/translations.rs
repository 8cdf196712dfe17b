#![forbid(unsafe_code)]

//! The site's translation table.
//!
//! One row per key with the English and Brazilian Portuguese text side by
//! side, so a missing translation shows up as a visibly short row rather
//! than a silent gap in a second file.

use folio_i18n::{LocaleStrings, PluralForms, StringCatalog};
use tracing::warn;

/// `(key, en, pt-br)`.
const STRINGS: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav.brand", "Portfolio", "Portfólio"),
    ("nav.home", "Home", "Início"),
    ("nav.about", "About Me", "Sobre Mim"),
    ("nav.projects", "Projects", "Projetos"),
    ("nav.skills", "Skills", "Habilidades"),
    ("nav.contact", "Contact", "Contato"),
    ("nav.language", "Language", "Idioma"),
    ("nav.openMenu", "Open menu", "Abrir menu"),
    ("nav.closeMenu", "Close menu", "Fechar menu"),
    // Hero
    ("hero.greeting", "Hello, I am", "Olá, eu sou"),
    ("hero.title", "Full Stack Developer", "Desenvolvedor Full Stack"),
    (
        "hero.description",
        "I build exceptional and accessible digital experiences for the web.",
        "Eu construo experiências digitais excepcionais e acessíveis para a web.",
    ),
    ("hero.cta", "Learn more about me", "Saiba mais sobre mim"),
    // About
    ("about.title", "About Me", "Sobre Mim"),
    ("about.subtitle", "Get to know me better", "Conheça-me melhor"),
    ("about.avatarAlt", "Profile", "Perfil"),
    (
        "about.bio",
        "I am a passionate software developer with expertise in building modern web applications. With several years of experience in the industry, I have worked on a variety of projects ranging from small business websites to complex enterprise applications.",
        "Sou um desenvolvedor de software apaixonado com experiência na construção de aplicações web modernas. Com vários anos de experiência na indústria, trabalhei em uma variedade de projetos, desde sites de pequenas empresas até aplicações empresariais complexas.",
    ),
    ("about.experience", "Experience", "Experiência"),
    (
        "about.experienceText",
        "Over 5 years of professional experience working with React, TypeScript, and modern web technologies.",
        "Mais de 5 anos de experiência profissional trabalhando com React, TypeScript e tecnologias web modernas.",
    ),
    ("about.education", "Education", "Educação"),
    (
        "about.educationText",
        "Bachelor's degree in Computer Science from a prestigious university, with additional certifications in web development and UI/UX design.",
        "Bacharelado em Ciência da Computação por uma universidade prestigiada, com certificações adicionais em desenvolvimento web e design de UI/UX.",
    ),
    ("about.interests", "Interests", "Interesses"),
    (
        "about.interestsText",
        "When I'm not coding, I enjoy hiking, photography, and exploring new technologies. I'm also an avid reader and enjoy participating in tech communities.",
        "Quando não estou programando, gosto de fazer trilhas, fotografia e explorar novas tecnologias. Também sou um leitor ávido e gosto de participar em comunidades de tecnologia.",
    ),
    // Projects
    ("projects.title", "Projects", "Projetos"),
    (
        "projects.subtitle",
        "Check out some of my recent work",
        "Confira alguns dos meus trabalhos recentes",
    ),
    ("projects.filter.all", "All", "Todos"),
    ("projects.filter.web", "Web", "Web"),
    ("projects.filter.mobile", "Mobile", "Mobile"),
    ("projects.filter.other", "Other", "Outros"),
    ("projects.viewMoreProjects", "View More Projects", "Ver Mais Projetos"),
    ("projects.viewMore", "View More", "Ver Mais"),
    ("projects.viewLess", "View Less", "Ver Menos"),
    ("projects.viewDetails", "View Details", "Ver Detalhes"),
    ("projects.closeDetails", "Close", "Fechar"),
    ("projects.visitSite", "Visit Site", "Visitar Site"),
    ("projects.viewCode", "View Code", "Ver Código"),
    ("projects.real", "Live project", "Projeto real"),
    (
        "projects.empty",
        "No projects in this category yet.",
        "Ainda não há projetos nesta categoria.",
    ),
    ("projects.ecommerce.title", "E-commerce Platform", "Plataforma de E-commerce"),
    (
        "projects.ecommerce.description",
        "A full-featured e-commerce platform with product management, cart, and checkout.",
        "Uma plataforma de e-commerce completa com gerenciamento de produtos, carrinho e checkout.",
    ),
    (
        "projects.ecommerce.details",
        "This e-commerce platform was built using React, Node.js, and MongoDB. It features user authentication, product management, shopping cart functionality, payment processing with Stripe, and order tracking. The UI was designed with a focus on user experience and mobile responsiveness.",
        "Esta plataforma de e-commerce foi construída usando React, Node.js e MongoDB. Possui autenticação de usuário, gerenciamento de produtos, funcionalidade de carrinho de compras, processamento de pagamentos com Stripe e rastreamento de pedidos. A interface foi projetada com foco na experiência do usuário e responsividade móvel.",
    ),
    (
        "projects.taskapp.title",
        "Task Management App",
        "Aplicativo de Gerenciamento de Tarefas",
    ),
    (
        "projects.taskapp.description",
        "A mobile app for managing tasks with reminders and categories.",
        "Um aplicativo móvel para gerenciar tarefas com lembretes e categorias.",
    ),
    (
        "projects.taskapp.details",
        "This task management app was developed using React Native and Firebase. It allows users to create, edit, and delete tasks, set reminders, categorize tasks, and track progress. The app features a clean and intuitive interface with dark mode support.",
        "Este aplicativo de gerenciamento de tarefas foi desenvolvido usando React Native e Firebase. Permite aos usuários criar, editar e excluir tarefas, definir lembretes, categorizar tarefas e acompanhar o progresso. O aplicativo possui uma interface limpa e intuitiva com suporte ao modo escuro.",
    ),
    ("projects.weather.title", "Weather Dashboard", "Painel de Clima"),
    (
        "projects.weather.description",
        "A web application that displays weather information for any location.",
        "Uma aplicação web que exibe informações meteorológicas para qualquer localização.",
    ),
    (
        "projects.weather.details",
        "This weather dashboard uses the OpenWeatherMap API to fetch and display current weather conditions and forecasts for any location. Built with React and styled with Tailwind CSS, it features a responsive design, search functionality, and visualization of weather data using charts.",
        "Este painel meteorológico usa a API OpenWeatherMap para buscar e exibir condições meteorológicas atuais e previsões para qualquer localização. Construído com React e estilizado com Tailwind CSS, possui design responsivo, funcionalidade de pesquisa e visualização de dados meteorológicos usando gráficos.",
    ),
    ("projects.portfolio.title", "Portfolio Website", "Site de Portfólio"),
    (
        "projects.portfolio.description",
        "A personal portfolio website showcasing projects and skills.",
        "Um site de portfólio pessoal mostrando projetos e habilidades.",
    ),
    (
        "projects.portfolio.details",
        "This portfolio website was built using React, Vite, and Tailwind CSS. It features a responsive design, smooth animations with Framer Motion, and multi-language support with i18n. The site includes sections for showcasing projects, skills, and contact information.",
        "Este site de portfólio foi construído usando React, Vite e Tailwind CSS. Possui design responsivo, animações suaves com Framer Motion e suporte a múltiplos idiomas com i18n. O site inclui seções para mostrar projetos, habilidades e informações de contato.",
    ),
    (
        "projects.datavis.title",
        "Data Visualization Tool",
        "Ferramenta de Visualização de Dados",
    ),
    (
        "projects.datavis.description",
        "A tool for visualizing complex datasets with interactive charts.",
        "Uma ferramenta para visualizar conjuntos de dados complexos com gráficos interativos.",
    ),
    (
        "projects.datavis.details",
        "This data visualization tool was built using D3.js and React. It allows users to upload CSV or JSON data and create interactive visualizations such as bar charts, line graphs, pie charts, and scatter plots. The tool includes features for filtering, sorting, and exporting visualizations.",
        "Esta ferramenta de visualização de dados foi construída usando D3.js e React. Permite aos usuários carregar dados CSV ou JSON e criar visualizações interativas como gráficos de barras, gráficos de linha, gráficos de pizza e gráficos de dispersão. A ferramenta inclui recursos para filtrar, classificar e exportar visualizações.",
    ),
    (
        "projects.fitness.title",
        "Fitness Tracking App",
        "Aplicativo de Rastreamento de Fitness",
    ),
    (
        "projects.fitness.description",
        "A mobile app for tracking workouts, nutrition, and fitness goals.",
        "Um aplicativo móvel para rastrear treinos, nutrição e metas de condicionamento físico.",
    ),
    (
        "projects.fitness.details",
        "This fitness tracking app was developed using Flutter and Firebase. It allows users to track workouts, log meals, set fitness goals, and monitor progress over time. The app includes features such as workout plans, calorie counting, and progress charts.",
        "Este aplicativo de rastreamento de fitness foi desenvolvido usando Flutter e Firebase. Permite aos usuários rastrear treinos, registrar refeições, definir metas de condicionamento físico e monitorar o progresso ao longo do tempo. O aplicativo inclui recursos como planos de treino, contagem de calorias e gráficos de progresso.",
    ),
    // Skills
    ("skills.title", "My Skills", "Minhas Habilidades"),
    (
        "skills.subtitle",
        "Technologies and tools I work with",
        "Tecnologias e ferramentas com as quais trabalho",
    ),
    ("skills.category.frontend", "Frontend", "Frontend"),
    ("skills.category.backend", "Backend", "Backend"),
    ("skills.category.tools", "Tools & DevOps", "Ferramentas & DevOps"),
    ("skills.category.languages", "Languages", "Linguagens"),
    ("skills.level.beginner", "Beginner", "Iniciante"),
    ("skills.level.intermediate", "Intermediate", "Intermediário"),
    ("skills.level.advanced", "Advanced", "Avançado"),
    ("skills.level.expert", "Expert", "Especialista"),
    // Contact
    ("contact.title", "Contact Me", "Entre em Contato"),
    (
        "contact.subtitle",
        "Get in touch with me through the form below or direct channels.",
        "Fale comigo através do formulário abaixo ou canais diretos.",
    ),
    ("contact.name", "Name", "Nome"),
    ("contact.email", "Email", "Email"),
    ("contact.message", "Message", "Mensagem"),
    ("contact.namePlaceholder", "Your name", "Seu nome"),
    (
        "contact.emailPlaceholder",
        "your.email@example.com",
        "seu.email@exemplo.com",
    ),
    ("contact.messagePlaceholder", "Your message here...", "Sua mensagem aqui..."),
    ("contact.send", "Send Message", "Enviar Mensagem"),
    ("contact.sending", "Sending...", "Enviando..."),
    (
        "contact.success",
        "Message sent successfully!",
        "Mensagem enviada com sucesso!",
    ),
    (
        "contact.failed",
        "Your message could not be sent.",
        "Não foi possível enviar sua mensagem.",
    ),
    ("contact.retry", "Try again", "Tentar novamente"),
    (
        "contact.failure.network",
        "The connection failed. Check your network.",
        "A conexão falhou. Verifique sua rede.",
    ),
    (
        "contact.failure.timeout",
        "The server took too long to answer.",
        "O servidor demorou demais para responder.",
    ),
    (
        "contact.failure.rejected",
        "The server rejected the message.",
        "O servidor recusou a mensagem.",
    ),
    ("contact.error.required", "This field is required.", "Este campo é obrigatório."),
    (
        "contact.error.email",
        "Enter a valid email address.",
        "Informe um endereço de email válido.",
    ),
    (
        "contact.orText",
        "Or reach me directly via:",
        "Ou entre em contato diretamente via:",
    ),
    ("contact.whatsapp", "WhatsApp", "WhatsApp"),
    ("contact.phone", "Phone", "Telefone"),
    ("contact.portfolio", "Portfolio", "Portfólio"),
    // Footer
    ("footer.copyright", "All Rights Reserved", "Todos os Direitos Reservados"),
    ("footer.madeWith", "Made with", "Feito com"),
    ("footer.by", "by {name}", "por {name}"),
    // Toast
    (
        "toast.welcome",
        "Welcome to my portfolio!",
        "Bem-vindo ao meu portfólio!",
    ),
    ("toast.dismiss", "Dismiss", "Fechar"),
];

/// `(key, en one, en other, pt-br one, pt-br other)`.
const PLURALS: &[(&str, &str, &str, &str, &str)] = &[(
    "skills.count",
    "{count} skill in this category",
    "{count} skills in this category",
    "{count} habilidade nesta categoria",
    "{count} habilidades nesta categoria",
)];

/// Build the catalog for every supported locale.
///
/// English is the fallback, so a key that only exists in English still
/// renders in Portuguese instead of showing the raw key.
#[must_use]
pub fn translations() -> StringCatalog {
    let mut en = LocaleStrings::new();
    let mut pt = LocaleStrings::new();
    for &(key, en_text, pt_text) in STRINGS {
        en.insert(key, en_text);
        pt.insert(key, pt_text);
    }
    for &(key, en_one, en_other, pt_one, pt_other) in PLURALS {
        en.insert_plural(key, PluralForms::one_other(en_one, en_other));
        pt.insert_plural(key, PluralForms::one_other(pt_one, pt_other));
    }
    let mut catalog = StringCatalog::new();
    catalog.add_locale("en", en);
    catalog.add_locale("pt-br", pt);
    if let Err(err) = catalog.set_fallback_chain(&["en"]) {
        warn!(%err, "translation fallback chain rejected");
    }
    catalog
}
