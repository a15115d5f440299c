pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod point2d;

    pub mod integration {
        pub mod integrationerror;
        pub mod integrationrule;
        pub mod domain;
        pub mod sampleset;
        pub mod pointgenerator;
        pub mod quadrature;
        pub mod convergenceloop;
    }
}

pub mod rdf {
    pub mod radialdensity;
    pub mod rdfnormalizer;
}

pub mod wavefunction {
    pub mod wavefunction;
    pub mod hydrogenic;
    pub mod slatertype;
    pub mod tabulatedwavefunction;
    pub mod wavefunctionloader;
}
