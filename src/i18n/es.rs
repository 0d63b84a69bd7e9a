use super::*;

pub static ES: Dictionary = Dictionary {
    nav: NavText {
        home: "Inicio",
        about: "Sobre Mí",
        experience: "Experiencia",
        skills: "Habilidades",
        education: "Educación",
        projects: "Proyectos",
        contact: "Contacto",
        open_menu: "Abrir menú",
        close_menu: "Cerrar menú",
        back_to_top: "Volver arriba",
    },
    hero: HeroText {
        greeting: "Hola, yo soy",
        name: "Juan G.",
        title: "Desarrollador Fullstack",
        description: "Construyo aplicaciones web innovadoras y escalables con tecnologías modernas.",
        cta: "Ver Mi Trabajo",
        contact: "Contáctame",
        roles: &[
            "Desarrollador Fullstack",
            "Constructor Serverless",
            "Ingeniero de Integraciones de IA",
            "Desarrollador Backend",
        ],
    },
    about: AboutText {
        title: "Sobre Mí",
        description: "Como desarrollador de software con cuatro años de experiencia, me distingo por mi ética de trabajo y profesionalismo en cada proyecto. Tengo un fuerte deseo de aprender y crecer, siempre buscando nuevas tecnologías y mejores prácticas. Disfruto colaborar en equipo y valoro la retroalimentación constructiva. Mi objetivo es desarrollar soluciones innovadoras de manera creativa y contribuir al éxito de la empresa aprovechando mi conocimiento y experiencia.",
        years_of_experience: "Años de Experiencia",
        completed_projects: "Proyectos Completados",
        technologies: "Tecnologías",
    },
    experience: ExperienceText {
        title: "Experiencia Laboral",
        current: "Actual",
        roles: &[
            Role {
                title: "Desarrollador Fullstack Mid",
                company: "Genpact",
                period: "Agosto 2024 - Actualmente",
                description: "Como Desarrollador Full-Stack, me especializo en AWS, React, TypeScript y Python, con experiencia en arquitecturas serverless utilizando AWS Lambda para aplicaciones de inteligencia artificial. Integro LLMs a través de Amazon Bedrock para optimizar el procesamiento de datos, ofreciendo soluciones innovadoras y de alto impacto.",
                current: true,
            },
            Role {
                title: "Desarrollador Backend Jr",
                company: "Yalutec",
                period: "Junio 2022 - Agosto 2024",
                description: "Como Desarrollador Backend Junior, tengo experiencia en Node.js, JavaScript y AWS (S3, Lambda), desarrollando APIs RESTful y optimizando bases de datos en entornos Linux. Me destaco por mi aprendizaje rápido, resolución de problemas y trabajo en equipo, siempre enfocado en crear soluciones eficientes y escalables.",
                current: false,
            },
        ],
    },
    skills: SkillsText {
        title: "Habilidades",
        hard_skills: "Habilidades Técnicas",
        soft_skills: "Habilidades Blandas",
        languages: "Idiomas",
        chart_title: "Dominio por Tecnología",
        all: "Todas",
        year: "año",
        years: "años",
        experience: "de experiencia",
        select_prompt: "Selecciona una habilidad para ver información detallada",
        hard: &[
            "Desarrollo backend con JavaScript y Node.js",
            "Desarrollo frontend con React y TypeScript",
            "Desarrollo backend con C# y .NET Framework",
            "Desarrollo con PHP utilizando Laravel y Symfony Framework",
            "Servicios web (API REST, SOAP)",
            "Bases de datos: SQL, MongoDB, MariaDB",
            "Control de versiones: GitHub y GitLab",
            "Servicios de AWS: Lambda, S3 y API Gateway",
            "Certificación en fundamentos de Linux",
        ],
        soft: &[
            "Proactividad",
            "Organización",
            "Responsabilidad",
            "Capacidad de trabajo en equipo",
            "Relaciones interpersonales",
            "Empatía",
            "Liderazgo",
            "Dirección de equipos",
            "Resolución de problemas",
            "Agilidad en el desarrollo de tareas",
        ],
        languages_list: &[
            SpokenLanguage {
                name: "Inglés",
                level: "Avanzado (C1)",
                proficiency: 80,
            },
            SpokenLanguage {
                name: "Portugués",
                level: "Básico (A2)",
                proficiency: 30,
            },
            SpokenLanguage {
                name: "Italiano",
                level: "A1",
                proficiency: 15,
            },
            SpokenLanguage {
                name: "Español",
                level: "Nativo",
                proficiency: 100,
            },
        ],
    },
    education: EducationText {
        title: "Educación",
        degrees: &[
            Degree {
                title: "Ingeniería en Sistemas",
                institution: "Universidad Mariano Gálvez",
                period: "2022 - 2026",
                status: "Cursando",
            },
            Degree {
                title: "Ingeniería en Informática",
                institution: "Universidad Rafael Landívar",
                period: "2018 - 2023",
                status: "Pensum Cerrado",
            },
        ],
        certifications_title: "Carreras Técnicas y Certificaciones",
        certifications: &[
            "Técnico desarrollador fullstack",
            "Técnico en administración y seguridad de redes",
            "Técnico en instalación y administración de servidores Linux",
            "Técnico en cableado estructurado y fibra óptica",
            "Certificación en fundamentos de Linux",
        ],
    },
    projects: ProjectsText {
        title: "Proyectos",
        description: "Aquí hay algunos de los proyectos en los que he trabajado",
        load_more: "Cargar Más Proyectos",
        all: "Todos",
        empty: "Aún no hay proyectos en esta categoría.",
        code: "Código",
        demo: "Demo",
    },
    contact: ContactText {
        title: "Contáctame",
        description: "Siéntete libre de contactarme para colaboración o preguntas",
        form_name: "Nombre",
        form_email: "Correo Electrónico",
        form_message: "Mensaje",
        form_send: "Enviar Mensaje",
        form_sent: "¡Gracias por tu mensaje! Este formulario aún no envía correos, así que escríbeme directamente.",
        phone: "Teléfono",
        email: "Correo Electrónico",
        location: "Ubicación",
    },
    theme: ThemeText {
        light: "Modo Claro",
        dark: "Modo Oscuro",
        high_contrast: "Modo Alto Contraste",
    },
    language: LanguageText {
        en: "Inglés",
        es: "Español",
    },
    footer: FooterText {
        rights: "Todos los derechos reservados.",
        navigation: "Navegación",
        built: "Compilado",
    },
    error: ErrorText {
        title: "¡Algo salió mal!",
        fallback: "Ocurrió un error inesperado. Por favor, inténtalo de nuevo.",
        retry: "Intentar de nuevo",
        not_found: "Página no encontrada.",
    },
};
